//! Heatmap chart: option construction, color scale, SVG drawing and the chart instance lifecycle.

pub mod instance;
pub mod option;
pub mod palette;
pub mod svg;

pub use instance::{ChartHost, ChartId, HeatmapChart, Surface, DEFAULT_SURFACE};
pub use option::{build_option, HeatPoint, HeatmapOption};
pub use palette::{ColorScale, Rgb, HEAT_PALETTE};
