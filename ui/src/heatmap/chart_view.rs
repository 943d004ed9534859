use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::chart::{ChartHost, ChartId, Surface, DEFAULT_SURFACE};
use crate::core::state::HeatmapState;
use crate::heatmap::redraw;

/// Chart surface. Keyed by the state's mount epoch, so every generate
/// remounts it and attaches a fresh chart instance.
#[component]
pub fn HeatmapChartView(state: Signal<HeatmapState>, host: Signal<ChartHost>) -> Element {
    let attached: Rc<Cell<Option<ChartId>>> = use_hook(|| Rc::new(Cell::new(None)));

    {
        let attached = attached.clone();
        let mut host = host;
        use_drop(move || {
            if let Some(id) = attached.get() {
                if let Ok(mut guard) = host.try_write() {
                    guard.detach_if(id);
                }
            }
        });
    }

    let markup = host.read().svg().unwrap_or_default().to_string();

    rsx! {
        section { class: "heatmap-card heatmap-chart",
            div {
                class: "heatmap-chart__surface",
                onmounted: move |evt: MountedEvent| {
                    let attached = attached.clone();
                    async move {
                        let surface = match evt.get_client_rect().await {
                            Ok(rect) => Surface::from_client_size(rect.size.width, rect.size.height),
                            Err(_) => DEFAULT_SURFACE,
                        };
                        let mut host = host;
                        host.write().attach(surface);
                        attached.set(host.read().chart().map(|chart| chart.id()));
                        redraw(state, host);
                    }
                },
                dangerous_inner_html: "{markup}",
            }
        }
    }
}
