//! Chart instances bound to a view surface, and the host that owns them.
//!
//! A `ChartHost` holds at most one live `HeatmapChart`. Attaching to a new
//! surface disposes the previous instance first; detaching disposes the
//! current one. Disposal consumes the chart, so a disposed instance can't be
//! drawn or snapshotted again.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::logger::tracing::{debug, enabled, trace, Level};

use crate::export::raster::{self, RasterSnapshot};
use crate::export::ExportError;

use super::option::HeatmapOption;
use super::svg::render_svg;

pub const DEFAULT_SURFACE: Surface = Surface {
    width: 960,
    height: 600,
};

/// Smallest surface worth drawing on; mounted rects below this fall back to the default.
const MIN_SURFACE_EDGE: u32 = 120;

static NEXT_CHART_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    /// Build from a measured client rect, falling back to [`DEFAULT_SURFACE`] when unusable.
    pub fn from_client_size(width: f64, height: f64) -> Self {
        let usable = |edge: f64| edge.is_finite() && edge >= f64::from(MIN_SURFACE_EDGE);
        if usable(width) && usable(height) {
            Self {
                width: width.round().min(f64::from(u16::MAX)) as u32,
                height: height.round().min(f64::from(u16::MAX)) as u32,
            }
        } else {
            DEFAULT_SURFACE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartId(u64);

#[derive(Debug, PartialEq)]
pub struct HeatmapChart {
    id: ChartId,
    surface: Surface,
    option: Option<HeatmapOption>,
    markup: String,
}

impl HeatmapChart {
    pub fn init(surface: Surface) -> Self {
        let id = ChartId(NEXT_CHART_ID.fetch_add(1, Ordering::Relaxed));
        debug!(chart = id.0, width = surface.width, height = surface.height, "chart attached");
        Self {
            id,
            surface,
            option: None,
            markup: String::new(),
        }
    }

    pub fn id(&self) -> ChartId {
        self.id
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn option(&self) -> Option<&HeatmapOption> {
        self.option.as_ref()
    }

    /// Replace the option and redraw.
    pub fn set_option(&mut self, option: HeatmapOption) {
        self.markup = render_svg(&option, self.surface);
        if enabled!(Level::TRACE) {
            if let Ok(json) = option.to_json() {
                trace!(chart = self.id.0, option = %json, "chart option");
            }
        }
        debug!(
            chart = self.id.0,
            points = option.series.len(),
            "chart option updated"
        );
        self.option = Some(option);
    }

    /// Current SVG markup; empty until the first `set_option`.
    pub fn svg(&self) -> &str {
        &self.markup
    }

    /// Rasterize the current drawing to PNG. The future owns a copy of the
    /// markup, so no borrow of the chart is held while it runs.
    pub fn snapshot(
        &self,
        pixel_ratio: f64,
        background: &str,
    ) -> impl Future<Output = Result<RasterSnapshot, ExportError>> + 'static {
        let markup = self.markup.clone();
        let surface = self.surface;
        let background = background.to_string();
        async move { raster::rasterize(&markup, surface, pixel_ratio, &background).await }
    }

    pub fn dispose(self) -> ChartId {
        debug!(chart = self.id.0, "chart disposed");
        self.id
    }
}

#[derive(Debug, Default, PartialEq)]
pub struct ChartHost {
    chart: Option<HeatmapChart>,
}

impl ChartHost {
    /// Create a chart on `surface`, disposing any existing one. Returns the disposed id.
    pub fn attach(&mut self, surface: Surface) -> Option<ChartId> {
        let previous = self.detach();
        self.chart = Some(HeatmapChart::init(surface));
        previous
    }

    pub fn detach(&mut self) -> Option<ChartId> {
        self.chart.take().map(HeatmapChart::dispose)
    }

    /// Detach only if `id` is still the live chart. A view being torn down
    /// must not dispose the chart its replacement already attached.
    pub fn detach_if(&mut self, id: ChartId) -> Option<ChartId> {
        match &self.chart {
            Some(chart) if chart.id() == id => self.detach(),
            _ => None,
        }
    }

    pub fn chart(&self) -> Option<&HeatmapChart> {
        self.chart.as_ref()
    }

    pub fn chart_mut(&mut self) -> Option<&mut HeatmapChart> {
        self.chart.as_mut()
    }

    pub fn svg(&self) -> Option<&str> {
        self.chart.as_ref().map(HeatmapChart::svg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::option::build_option;
    use crate::core::grid::Grid;

    #[test]
    fn attach_disposes_previous_instance() {
        let mut host = ChartHost::default();
        assert!(host.attach(DEFAULT_SURFACE).is_none());
        let first = host.chart().unwrap().id();

        let disposed = host.attach(DEFAULT_SURFACE);
        assert_eq!(disposed, Some(first));
        assert_ne!(host.chart().unwrap().id(), first);
    }

    #[test]
    fn detach_leaves_host_empty() {
        let mut host = ChartHost::default();
        host.attach(DEFAULT_SURFACE);
        assert!(host.detach().is_some());
        assert!(host.chart().is_none());
        assert!(host.detach().is_none());
    }

    #[test]
    fn stale_detach_keeps_replacement() {
        let mut host = ChartHost::default();
        host.attach(DEFAULT_SURFACE);
        let stale = host.chart().unwrap().id();
        host.attach(DEFAULT_SURFACE);
        let live = host.chart().unwrap().id();

        assert!(host.detach_if(stale).is_none());
        assert_eq!(host.chart().map(HeatmapChart::id), Some(live));
        assert_eq!(host.detach_if(live), Some(live));
        assert!(host.chart().is_none());
    }

    #[test]
    fn set_option_redraws_markup() {
        let mut host = ChartHost::default();
        host.attach(DEFAULT_SURFACE);
        assert_eq!(host.svg(), Some(""));

        let chart = host.chart_mut().unwrap();
        chart.set_option(build_option(&Grid::empty(2, 2), "İlk"));
        assert!(chart.svg().contains("İlk"));

        let mut grid = Grid::empty(1, 1);
        grid.set_raw(0, 0, "7");
        chart.set_option(build_option(&grid, "İkinci"));
        assert!(chart.svg().contains("İkinci"));
        assert!(chart.svg().contains("Ortalama: 7.00"));
        assert_eq!(chart.option().unwrap().series.len(), 1);
    }

    #[test]
    fn surface_falls_back_when_unmeasured() {
        assert_eq!(Surface::from_client_size(0.0, 0.0), DEFAULT_SURFACE);
        assert_eq!(Surface::from_client_size(f64::NAN, 400.0), DEFAULT_SURFACE);
        assert_eq!(
            Surface::from_client_size(812.4, 480.0),
            Surface {
                width: 812,
                height: 480
            }
        );
    }
}
