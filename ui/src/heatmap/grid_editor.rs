use dioxus::prelude::*;

use crate::chart::ChartHost;
use crate::core::state::HeatmapState;
use crate::heatmap::redraw;

#[component]
pub fn HeatmapGridEditor(state: Signal<HeatmapState>, host: Signal<ChartHost>) -> Element {
    let snapshot = state.read();
    let revision = snapshot.revision();
    let rows = snapshot.grid().row_count();
    let cols = snapshot.grid().col_count();
    let invalid: Vec<Vec<bool>> = snapshot
        .grid()
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| cell.is_some_and(f64::is_nan)).collect())
        .collect();
    drop(snapshot);

    let mut state_signal = state;

    rsx! {
        section { class: "heatmap-card heatmap-editor",
            div { class: "heatmap-card__header",
                h2 { "Veri Girişi" }
                button {
                    r#type: "button",
                    class: "button button--ghost",
                    onclick: move |_| {
                        if state_signal.write().clear() {
                            redraw(state, host);
                        }
                    },
                    "Temizle"
                }
            }

            div { class: "heatmap-editor__scroll", key: "{revision}",
                table { class: "heatmap-editor__table",
                    thead {
                        tr {
                            th {}
                            for col in 0..cols {
                                th { key: "{col}", class: "heatmap-editor__axis", "S{col + 1}" }
                            }
                        }
                    }
                    tbody {
                        for row in 0..rows {
                            tr { key: "{row}",
                                th { class: "heatmap-editor__axis", "R{row + 1}" }
                                for col in 0..cols {
                                    td { key: "{col}",
                                        CellInput {
                                            state,
                                            host,
                                            row,
                                            col,
                                            invalid: invalid[row][col],
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Uncontrolled input: the grid only stores parsed values, so the typed text
/// lives in the DOM until the editor is remounted by a new revision.
#[component]
fn CellInput(
    state: Signal<HeatmapState>,
    host: Signal<ChartHost>,
    row: usize,
    col: usize,
    invalid: bool,
) -> Element {
    let class = if invalid {
        "heatmap-cell heatmap-cell--invalid"
    } else {
        "heatmap-cell"
    };
    let mut state_signal = state;

    rsx! {
        input {
            class,
            r#type: "text",
            inputmode: "decimal",
            aria_label: "Hücre {row + 1}, {col + 1}",
            oninput: move |evt: FormEvent| {
                if state_signal.write().edit_cell(row, col, &evt.value()) {
                    redraw(state, host);
                }
            },
        }
    }
}
