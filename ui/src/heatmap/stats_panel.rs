use dioxus::prelude::*;

use crate::core::format::format_value;
use crate::core::state::HeatmapState;

#[component]
pub fn HeatmapStatsPanel(state: Signal<HeatmapState>) -> Element {
    let snapshot = state.read();
    let stats = snapshot.grid().stats();
    let invalid = snapshot.invalid_cells();
    drop(snapshot);

    rsx! {
        section { class: "heatmap-card heatmap-stats",
            div { class: "heatmap-card__header",
                h2 { "İstatistikler" }
            }

            match stats {
                Some(stats) => rsx! {
                    ul { class: "heatmap-stats__grid",
                        li { span { class: "heatmap-stats__label", "En düşük" } span { class: "heatmap-stats__value", "{format_value(stats.min)}" } }
                        li { span { class: "heatmap-stats__label", "En yüksek" } span { class: "heatmap-stats__value", "{format_value(stats.max)}" } }
                        li { span { class: "heatmap-stats__label", "Ortalama" } span { class: "heatmap-stats__value", "{format_value(stats.mean)}" } }
                        li { span { class: "heatmap-stats__label", "Değer sayısı" } span { class: "heatmap-stats__value", "{stats.count}" } }
                    }
                },
                None => rsx! {
                    p { class: "heatmap-card__placeholder", "Henüz sayısal değer girilmedi." }
                },
            }

            if invalid > 0 {
                p { class: "heatmap-card__meta heatmap-card__meta--error",
                    "{invalid} hücre sayı olarak okunamadı ve hesaplamaya katılmadı."
                }
            }
        }
    }
}
