//! Export filenames derived from the chart title.

use crate::core::config::DEFAULT_TITLE;

const SUFFIX: &str = "_heatmap";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Png => "png",
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Png => "image/png",
        }
    }
}

/// Every character outside `[A-Za-z0-9]` becomes `_`, the result is lowercased.
pub fn sanitize_title(title: &str) -> String {
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };
    title
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

pub fn export_filename(title: &str, format: ExportFormat) -> String {
    format!("{}{SUFFIX}.{}", sanitize_title(title), format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_ascii_and_symbols_are_replaced() {
        assert_eq!(
            export_filename("Sıcaklık #1", ExportFormat::Pdf),
            "s_cakl_k__1_heatmap.pdf"
        );
        assert_eq!(
            export_filename("Sıcaklık #1", ExportFormat::Png),
            "s_cakl_k__1_heatmap.png"
        );
    }

    #[test]
    fn ascii_titles_are_lowercased() {
        assert_eq!(
            export_filename("Office Floor 3", ExportFormat::Pdf),
            "office_floor_3_heatmap.pdf"
        );
    }

    #[test]
    fn blank_title_uses_default() {
        assert_eq!(
            export_filename("", ExportFormat::Png),
            "s_cakl_k_haritas__heatmap.png"
        );
    }
}
