//! The editable value grid and the statistics derived from it.

/// A single cell: `None` is empty, `Some(NaN)` marks input that did not parse.
pub type Cell = Option<f64>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

/// Extrema and mean over every valid (non-empty, non-NaN) cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub count: usize,
}

impl Grid {
    /// Allocate a `rows` × `cols` grid of empty cells.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![vec![None; cols]; rows],
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Store parsed input at `(row, col)`. Returns false when the position is outside the grid.
    pub fn set_raw(&mut self, row: usize, col: usize, raw: &str) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = parse_cell(raw);
                true
            }
            None => false,
        }
    }

    /// Every valid value in row-major order.
    pub fn values(&self) -> Vec<f64> {
        self.cells()
            .filter_map(|(_, _, value)| value)
            .collect()
    }

    /// Row-major walk yielding `(row, col, valid value)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Option<f64>)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (r, c, cell.filter(|v| !v.is_nan())))
        })
    }

    /// Cells holding input that failed to parse.
    pub fn invalid_count(&self) -> usize {
        self.rows
            .iter()
            .flatten()
            .filter(|cell| matches!(cell, Some(v) if v.is_nan()))
            .count()
    }

    pub fn stats(&self) -> Option<GridStats> {
        GridStats::from_values(&self.values())
    }
}

impl GridStats {
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        Some(Self {
            min,
            max,
            mean,
            count: values.len(),
        })
    }
}

/// Blank input is an empty cell; anything that is not a finite number becomes NaN.
/// A decimal comma (`1,5`) is accepted when the text has no `.`.
pub fn parse_cell(raw: &str) -> Cell {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };
    match normalized.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => Some(f64::NAN),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn empty_grid_has_requested_shape() {
        let grid = Grid::empty(3, 7);
        assert_eq!(grid.row_count(), 3);
        assert_eq!(grid.col_count(), 7);
        assert!(grid.rows().iter().flatten().all(Option::is_none));
        assert!(grid.stats().is_none());
    }

    #[test]
    fn parse_cell_variants() {
        assert_eq!(parse_cell(""), None);
        assert_eq!(parse_cell("   "), None);
        assert_eq!(parse_cell("12.5"), Some(12.5));
        assert_eq!(parse_cell(" -3 "), Some(-3.0));
        assert!(parse_cell("abc").is_some_and(f64::is_nan));
        assert!(parse_cell("inf").is_some_and(f64::is_nan));
    }

    #[test]
    fn decimal_comma_is_accepted() {
        assert_eq!(parse_cell("1,5"), Some(1.5));
        assert_eq!(parse_cell("-0,25"), Some(-0.25));
        assert!(parse_cell("1,234.5").is_some_and(f64::is_nan));
        assert!(parse_cell("1,2,3").is_some_and(f64::is_nan));
        assert!(parse_cell("12abc").is_some_and(f64::is_nan));
    }

    #[test]
    fn stats_skip_empty_and_invalid_cells() {
        let mut grid = Grid::empty(2, 2);
        grid.set_raw(0, 0, "1");
        grid.set_raw(1, 0, "3");
        grid.set_raw(1, 1, "4");
        grid.set_raw(0, 1, "x");

        let stats = grid.stats().unwrap();
        assert!(approx(stats.min, 1.0));
        assert!(approx(stats.max, 4.0));
        assert!(approx(stats.mean, 2.6667));
        assert_eq!(stats.count, 3);
        assert_eq!(grid.invalid_count(), 1);
    }

    #[test]
    fn out_of_bounds_edit_is_ignored() {
        let mut grid = Grid::empty(2, 2);
        assert!(!grid.set_raw(2, 0, "5"));
        assert!(!grid.set_raw(0, 9, "5"));
        assert_eq!(grid, Grid::empty(2, 2));
    }

    #[test]
    fn clearing_a_cell_restores_empty() {
        let mut grid = Grid::empty(1, 1);
        grid.set_raw(0, 0, "8");
        grid.set_raw(0, 0, "");
        assert_eq!(grid.get(0, 0), Some(None));
    }
}
