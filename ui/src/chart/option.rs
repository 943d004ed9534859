//! Declarative heatmap description built from the grid.
//!
//! `build_option` is the whole grid → chart transformation: flatten, drop
//! empty and NaN cells, compute min/max/mean, flip the row index so row 0
//! sits on top, and attach the color scale. Rendering consumes the result
//! without looking at the grid again.

use serde::Serialize;

use crate::core::format::format_value;
use crate::core::grid::{Grid, GridStats};

use super::palette::HEAT_PALETTE;

pub const SERIES_NAME: &str = "Sıcaklık";
pub const AVERAGE_LABEL: &str = "Ortalama";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapOption {
    pub title: String,
    pub x_axis: CategoryAxis,
    pub y_axis: CategoryAxis,
    pub visual_map: Option<VisualMap>,
    pub series: Vec<HeatPoint>,
    pub average: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAxis {
    /// Bottom-to-top for the y axis, left-to-right for x.
    pub labels: Vec<String>,
    pub show_labels: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualMap {
    pub min: f64,
    pub max: f64,
    pub palette: Vec<String>,
}

/// One rendered cell: `x` is the column, `y` the display row counted from the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeatPoint {
    pub x: usize,
    pub y: usize,
    pub value: f64,
}

impl HeatmapOption {
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn columns(&self) -> usize {
        self.x_axis.labels.len()
    }

    pub fn rows(&self) -> usize {
        self.y_axis.labels.len()
    }

    pub fn tooltip_for(point: &HeatPoint) -> String {
        format!("{SERIES_NAME}: {}", format_value(point.value))
    }

    pub fn average_text(&self) -> Option<String> {
        self.average
            .map(|mean| format!("{AVERAGE_LABEL}: {}", format_value(mean)))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

pub fn build_option(grid: &Grid, title: &str) -> HeatmapOption {
    let Some(stats) = grid.stats() else {
        return empty_option(title);
    };
    populated_option(grid, title, stats)
}

fn empty_option(title: &str) -> HeatmapOption {
    HeatmapOption {
        title: title.to_string(),
        x_axis: CategoryAxis {
            labels: Vec::new(),
            show_labels: true,
        },
        y_axis: CategoryAxis {
            labels: Vec::new(),
            show_labels: true,
        },
        visual_map: None,
        series: Vec::new(),
        average: None,
    }
}

fn populated_option(grid: &Grid, title: &str, stats: GridStats) -> HeatmapOption {
    let rows = grid.row_count();
    let cols = grid.col_count();

    let series = grid
        .cells()
        .filter_map(|(row, col, value)| {
            value.map(|value| HeatPoint {
                x: col,
                y: display_row(rows, row),
                value,
            })
        })
        .collect();

    HeatmapOption {
        title: title.to_string(),
        x_axis: CategoryAxis {
            labels: (1..=cols).map(|i| format!("S{i}")).collect(),
            show_labels: false,
        },
        y_axis: CategoryAxis {
            labels: (1..=rows).rev().map(|i| format!("R{i}")).collect(),
            show_labels: false,
        },
        visual_map: Some(VisualMap {
            min: stats.min,
            max: stats.max,
            palette: HEAT_PALETTE.iter().map(|hex| hex.to_string()).collect(),
        }),
        series,
        average: Some(stats.mean),
    }
}

/// Source row `row` is drawn at `rows - 1 - row`, counted from the bottom.
pub fn display_row(rows: usize, row: usize) -> usize {
    rows.saturating_sub(1).saturating_sub(row)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&[&str]]) -> Grid {
        let mut grid = Grid::empty(rows.len(), rows.first().map(|r| r.len()).unwrap_or(0));
        for (r, row) in rows.iter().enumerate() {
            for (c, raw) in row.iter().enumerate() {
                grid.set_raw(r, c, raw);
            }
        }
        grid
    }

    #[test]
    fn two_by_two_scenario() {
        let grid = grid_from(&[&["1", ""], &["3", "4"]]);
        let option = build_option(&grid, "Test");

        let points: Vec<_> = option.series.iter().map(|p| (p.x, p.y, p.value)).collect();
        assert_eq!(points, vec![(0, 1, 1.0), (0, 0, 3.0), (1, 0, 4.0)]);

        let map = option.visual_map.as_ref().unwrap();
        assert_eq!((map.min, map.max), (1.0, 4.0));
        assert_eq!(option.average_text().unwrap(), "Ortalama: 2.67");
        assert_eq!(option.x_axis.labels, vec!["S1", "S2"]);
        assert_eq!(option.y_axis.labels, vec!["R2", "R1"]);
        assert!(!option.x_axis.show_labels);
    }

    #[test]
    fn empty_grid_gives_empty_shell_with_title() {
        let option = build_option(&Grid::empty(4, 4), "Boş");
        assert!(option.is_empty());
        assert_eq!(option.title, "Boş");
        assert!(option.visual_map.is_none());
        assert!(option.average_text().is_none());
        assert_eq!(option.rows(), 0);
    }

    #[test]
    fn nan_cells_are_not_plotted() {
        let grid = grid_from(&[&["abc", "2"]]);
        let option = build_option(&grid, "t");
        assert_eq!(option.series.len(), 1);
        assert_eq!(option.series[0].x, 1);
    }

    #[test]
    fn row_zero_is_always_on_top() {
        for rows in 1..=50 {
            assert_eq!(display_row(rows, 0), rows - 1);
            assert_eq!(display_row(rows, rows - 1), 0);
        }
    }

    #[test]
    fn tooltip_uses_series_name() {
        let point = HeatPoint {
            x: 0,
            y: 0,
            value: 21.456,
        };
        assert_eq!(HeatmapOption::tooltip_for(&point), "Sıcaklık: 21.46");
    }

    #[test]
    fn option_serializes_to_json() {
        let grid = grid_from(&[&["5"]]);
        let json = build_option(&grid, "t").to_json().unwrap();
        assert!(json.contains("\"visual_map\""));
        assert!(json.contains("#a50026"));
    }
}
