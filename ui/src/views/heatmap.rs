use dioxus::prelude::*;

use crate::chart::ChartHost;
use crate::core::state::HeatmapState;
use crate::heatmap::{
    HeatmapChartView, HeatmapConfigPanel, HeatmapExportPanel, HeatmapGridEditor,
    HeatmapStatsPanel,
};

#[component]
pub fn Heatmap() -> Element {
    let state = use_signal(HeatmapState::new);
    let host = use_signal(ChartHost::default);

    let active = state.read().is_active();
    let epoch = state.read().mount_epoch();

    rsx! {
        section { class: "page page-heatmap",
            h1 { "Sıcaklık Haritası" }
            p {
                "Satır ve sütun sayısını belirleyin, hücrelere değer girin ve ısı haritasını PDF olarak indirin."
            }

            div { class: "heatmap__panels",
                div { class: "heatmap__sidebar",
                    HeatmapConfigPanel { state, host }
                    HeatmapStatsPanel { state }
                }

                div { class: "heatmap__main",
                    if active {
                        HeatmapChartView { key: "{epoch}", state, host }
                        HeatmapGridEditor { state, host }
                        HeatmapExportPanel { state, host }
                    } else {
                        section { class: "heatmap-card",
                            p { class: "heatmap-card__placeholder",
                                "Başlamak için yapılandırmayı doldurup “Isı Haritası Oluştur” düğmesine basın."
                            }
                        }
                    }
                }
            }
        }
    }
}
