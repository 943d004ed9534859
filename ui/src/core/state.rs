//! Form/state manager: owns the configuration form and the grid it generates.
//!
//! Every mutator reports whether the chart needs a redraw so the view layer
//! stays a thin adapter. Nothing here touches rendering.

use super::config::{ConfigForm, Field, FieldError};
use super::grid::Grid;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapState {
    pub form: ConfigForm,
    grid: Grid,
    active: bool,
    /// Bumped on every successful generate; the chart surface is keyed by it.
    mount_epoch: u64,
    /// Bumped whenever the grid is reallocated; cell inputs are keyed by it.
    revision: u64,
}

impl HeatmapState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn mount_epoch(&self) -> u64 {
        self.mount_epoch
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_valid(&self) -> bool {
        self.form.validate().is_ok()
    }

    pub fn field_errors(&self, field: Field) -> Vec<FieldError> {
        self.form.errors_for(field)
    }

    pub fn display_title(&self) -> &str {
        self.form.display_title()
    }

    /// Cells holding text that didn't parse as a number.
    pub fn invalid_cells(&self) -> usize {
        self.grid.invalid_count()
    }

    /// Allocate a fresh grid from the form. No-op (false) while the form is invalid.
    pub fn generate(&mut self) -> bool {
        let Ok(config) = self.form.validate() else {
            return false;
        };
        self.reallocate(config.rows, config.cols);
        self.active = true;
        self.mount_epoch = self.mount_epoch.wrapping_add(1);
        true
    }

    /// Empty every cell at the current dimensions. Returns true when a redraw is due.
    pub fn clear(&mut self) -> bool {
        let (rows, cols) = self
            .form
            .dimensions()
            .unwrap_or((self.grid.row_count(), self.grid.col_count()));
        self.reallocate(rows, cols);
        self.active
    }

    /// Parse and store a single cell. Returns true when a redraw is due.
    pub fn edit_cell(&mut self, row: usize, col: usize, raw: &str) -> bool {
        self.grid.set_raw(row, col, raw) && self.active
    }

    /// Returns true when the title change should be redrawn.
    pub fn edit_title(&mut self, raw: impl Into<String>) -> bool {
        self.form.title = raw.into();
        self.active
    }

    pub fn edit_rows(&mut self, raw: impl Into<String>) {
        self.form.rows = raw.into();
    }

    pub fn edit_cols(&mut self, raw: impl Into<String>) {
        self.form.cols = raw.into();
    }

    fn reallocate(&mut self, rows: usize, cols: usize) {
        self.grid = Grid::empty(rows, cols);
        self.revision = self.revision.wrapping_add(1);
    }
}
