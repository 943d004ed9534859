//! Shared UI crate for Heatgrid: grid state, chart rendering, export pipeline and views.

pub mod chart;
pub mod core;
pub mod export;
pub mod heatmap;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}
