//! Dioxus views binding `HeatmapState` and `ChartHost` signals to the page.

mod chart_view;
pub use chart_view::HeatmapChartView;

mod config_panel;
pub use config_panel::HeatmapConfigPanel;

mod grid_editor;
pub use grid_editor::HeatmapGridEditor;

mod stats_panel;
pub use stats_panel::HeatmapStatsPanel;

mod export_panel;
pub use export_panel::HeatmapExportPanel;

use dioxus::prelude::*;

use crate::chart::{build_option, ChartHost};
use crate::core::state::HeatmapState;

/// Rebuild the option from the current grid and push it to the live chart, if any.
pub(crate) fn redraw(state: Signal<HeatmapState>, mut host: Signal<ChartHost>) {
    let state = state.read();
    if let Some(chart) = host.write().chart_mut() {
        chart.set_option(build_option(state.grid(), state.display_title()));
    }
}
