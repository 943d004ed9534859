use dioxus::prelude::*;

use crate::chart::ChartHost;
use crate::core::config::Field;
use crate::core::state::HeatmapState;
use crate::heatmap::redraw;

#[component]
pub fn HeatmapConfigPanel(state: Signal<HeatmapState>, host: Signal<ChartHost>) -> Element {
    let snapshot = state.read();
    let title = snapshot.form.title.clone();
    let rows = snapshot.form.rows.clone();
    let cols = snapshot.form.cols.clone();
    let can_generate = snapshot.is_valid();
    let title_errors = error_messages(&snapshot, Field::Title);
    let rows_errors = error_messages(&snapshot, Field::Rows);
    let cols_errors = error_messages(&snapshot, Field::Cols);
    drop(snapshot);

    let mut state_signal = state;

    rsx! {
        section { class: "heatmap-card heatmap-config",
            div { class: "heatmap-card__header",
                h2 { "Yapılandırma" }
            }

            div { class: "heatmap-field",
                label { class: "heatmap-field__label", r#for: "heatmap-title", "Başlık" }
                input {
                    id: "heatmap-title",
                    class: "heatmap-field__input",
                    r#type: "text",
                    value: "{title}",
                    oninput: move |evt: FormEvent| {
                        if state_signal.write().edit_title(evt.value()) {
                            redraw(state, host);
                        }
                    },
                }
                FieldErrors { messages: title_errors }
            }

            div { class: "heatmap-config__dimensions",
                div { class: "heatmap-field",
                    label { class: "heatmap-field__label", r#for: "heatmap-rows", "Satır sayısı" }
                    input {
                        id: "heatmap-rows",
                        class: "heatmap-field__input",
                        r#type: "number",
                        min: "1",
                        max: "50",
                        value: "{rows}",
                        oninput: move |evt: FormEvent| state_signal.write().edit_rows(evt.value()),
                    }
                    FieldErrors { messages: rows_errors }
                }
                div { class: "heatmap-field",
                    label { class: "heatmap-field__label", r#for: "heatmap-cols", "Sütun sayısı" }
                    input {
                        id: "heatmap-cols",
                        class: "heatmap-field__input",
                        r#type: "number",
                        min: "1",
                        max: "50",
                        value: "{cols}",
                        oninput: move |evt: FormEvent| state_signal.write().edit_cols(evt.value()),
                    }
                    FieldErrors { messages: cols_errors }
                }
            }

            button {
                r#type: "button",
                class: "button button--primary",
                disabled: !can_generate,
                onclick: move |_| {
                    state_signal.write().generate();
                },
                "Isı Haritası Oluştur"
            }
        }
    }
}

fn error_messages(state: &HeatmapState, field: Field) -> Vec<String> {
    state
        .field_errors(field)
        .iter()
        .map(ToString::to_string)
        .collect()
}

#[component]
fn FieldErrors(messages: Vec<String>) -> Element {
    rsx! {
        for message in messages {
            p { class: "heatmap-field__error", "{message}" }
        }
    }
}
