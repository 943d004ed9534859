use dioxus::prelude::*;

use crate::chart::ChartHost;
use crate::core::platform::Platform;
use crate::core::state::HeatmapState;
use crate::export::{ExportJob, ExportOutcome};

#[derive(Clone, Debug, PartialEq)]
enum ExportStatus {
    Idle,
    Working(&'static str),
    Done(String),
    Error(String),
}

#[component]
pub fn HeatmapExportPanel(state: Signal<HeatmapState>, host: Signal<ChartHost>) -> Element {
    let status = use_signal(|| ExportStatus::Idle);
    let busy = use_signal(|| false);

    let feedback = match &status() {
        ExportStatus::Idle => None,
        ExportStatus::Working(label) => {
            Some(("heatmap-card__meta".to_string(), format!("{label}…")))
        }
        ExportStatus::Done(message) => Some((
            "heatmap-card__meta heatmap-card__meta--success".to_string(),
            format!("✅ {message}"),
        )),
        ExportStatus::Error(err) => Some((
            "heatmap-card__meta heatmap-card__meta--error".to_string(),
            format!("⚠️ {err}"),
        )),
    };

    let pdf_handler = {
        let mut status_signal = status;
        let mut busy_signal = busy;
        move |_| {
            if busy_signal() {
                return;
            }
            let title = state.read().display_title().to_string();
            let Some(job) = ExportJob::prepare(host.read().chart(), &title) else {
                status_signal.set(ExportStatus::Done(ExportOutcome::Skipped.message()));
                return;
            };

            busy_signal.set(true);
            status_signal.set(ExportStatus::Working("PDF hazırlanıyor"));
            spawn(async move {
                match job.run().await {
                    Ok(outcome) => status_signal.set(ExportStatus::Done(outcome.message())),
                    Err(err) => status_signal.set(ExportStatus::Error(err.to_string())),
                }
                busy_signal.set(false);
            });
        }
    };

    rsx! {
        section { class: "heatmap-card heatmap-export",
            div { class: "heatmap-card__header",
                h2 { "Dışa Aktar" }
            }

            p { class: "heatmap-card__meta", "{Platform::current().export_hint()}" }

            button {
                r#type: "button",
                class: "button button--primary",
                disabled: busy(),
                onclick: pdf_handler,
                "PDF İndir"
            }

            if let Some((class, message)) = feedback {
                p { class: "{class}", "{message}" }
            }
        }
    }
}
