//! Export pipeline: chart snapshot → PDF, with a PNG fallback.

pub mod delivery;
pub mod filename;
pub mod pdf;
pub mod raster;

use std::future::Future;
use std::pin::Pin;

use dioxus::logger::tracing::{error, info, warn};
use thiserror::Error;
use time::Date;

use crate::chart::HeatmapChart;
use crate::core::format::today_local;

pub use delivery::{deliver, download_bytes, Delivery, Destination};
pub use filename::{export_filename, sanitize_title, ExportFormat};
pub use raster::RasterSnapshot;

/// Snapshot density used for exports.
pub const EXPORT_PIXEL_RATIO: f64 = 2.0;
pub const EXPORT_BACKGROUND: &str = "#ffffff";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Grafik görüntüsü alınamadı: {0}")]
    Raster(String),
    #[error("PNG çözülemedi: {0}")]
    Decode(#[from] png::DecodingError),
    #[error("Desteklenmeyen görüntü biçimi ({0})")]
    UnsupportedBitmap(&'static str),
    #[error("Grafik görüntüsü boş")]
    EmptyBitmap,
    #[error("{0}")]
    Platform(&'static str),
    #[error("Dosya yazılamadı: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dışa aktarma klasörü belirlenemedi")]
    ExportDir,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Nothing to export: no chart was mounted.
    Skipped,
    Pdf { delivery: Delivery },
    /// PDF assembly failed; the raw snapshot was delivered instead.
    PngFallback { delivery: Delivery, reason: String },
}

impl ExportOutcome {
    pub fn message(&self) -> String {
        match self {
            ExportOutcome::Skipped => "Dışa aktarılacak grafik yok".to_string(),
            ExportOutcome::Pdf { delivery } => delivery.describe(),
            ExportOutcome::PngFallback { delivery, .. } => {
                format!("PDF oluşturulamadı, PNG verildi. {}", delivery.describe())
            }
        }
    }
}

type SnapshotFuture = Pin<Box<dyn Future<Output = Result<RasterSnapshot, ExportError>>>>;

/// A pending export. The chart snapshot future owns its copy of the drawing,
/// so no chart borrow is held across the async raster step.
pub struct ExportJob {
    snapshot: SnapshotFuture,
    title: String,
}

impl ExportJob {
    pub fn prepare(chart: Option<&HeatmapChart>, title: &str) -> Option<Self> {
        chart.map(|chart| Self {
            snapshot: Box::pin(chart.snapshot(EXPORT_PIXEL_RATIO, EXPORT_BACKGROUND)),
            title: title.to_string(),
        })
    }

    pub async fn run(self) -> Result<ExportOutcome, ExportError> {
        let outcome = self
            .run_with(pdf::build_pdf, today_local(), &Destination::Platform)
            .await;
        if let Err(err) = &outcome {
            error!(error = %err, "export failed");
        }
        outcome
    }

    /// Snapshot, build the document with `build` and deliver it. Any failure
    /// to build or deliver the PDF falls back to delivering the PNG.
    pub async fn run_with<B>(
        self,
        build: B,
        date: Date,
        destination: &Destination,
    ) -> Result<ExportOutcome, ExportError>
    where
        B: FnOnce(&[u8], &str, Date) -> Result<Vec<u8>, ExportError>,
    {
        let snapshot = self.snapshot.await?;

        let pdf_failure = match build(&snapshot.png, &self.title, date) {
            Ok(document) => {
                let filename = export_filename(&self.title, ExportFormat::Pdf);
                let saved =
                    deliver(destination, &filename, ExportFormat::Pdf.mime(), document).await;
                match saved {
                    Ok(delivery) => {
                        info!(file = %filename, "PDF exported");
                        return Ok(ExportOutcome::Pdf { delivery });
                    }
                    Err(err) => err,
                }
            }
            Err(err) => err,
        };

        warn!(error = %pdf_failure, "PDF export failed, delivering PNG");
        let filename = export_filename(&self.title, ExportFormat::Png);
        let delivery =
            deliver(destination, &filename, ExportFormat::Png.mime(), snapshot.png).await?;
        info!(file = %filename, "PNG exported");
        Ok(ExportOutcome::PngFallback {
            delivery,
            reason: pdf_failure.to_string(),
        })
    }
}

/// Export the mounted chart as a landscape A4 PDF, falling back to PNG.
pub async fn download_pdf(
    chart: Option<&HeatmapChart>,
    title: &str,
) -> Result<ExportOutcome, ExportError> {
    match ExportJob::prepare(chart, title) {
        Some(job) => job.run().await,
        None => Ok(ExportOutcome::Skipped),
    }
}
