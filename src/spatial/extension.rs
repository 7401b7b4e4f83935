//! Lattice growth arithmetic for drag-driven expansion
//!
//! Growth is symmetric about the origin: adding an even number of rows or
//! columns shifts the lattice edges by whole tiles, so every existing tile
//! center is still a tile center afterwards.

use crate::spatial::lattice::GridConfig;

/// Outcome of a growth request against the dimension cap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtensionInfo {
    /// Configuration after growth (unchanged when nothing was added)
    pub new_config: GridConfig,
    /// Rows added by this growth
    pub rows_added: usize,
    /// Columns added by this growth
    pub cols_added: usize,
    /// Whether the cap shortened or refused the requested step
    pub capped: bool,
}

impl ExtensionInfo {
    /// Whether any rows or columns were added
    pub const fn grew(&self) -> bool {
        self.rows_added + self.cols_added > 0
    }
}

/// Grow both dimensions by `step`, limited by `max_dimension`
///
/// Near the cap each axis grows by the largest even amount that still fits,
/// which keeps previously generated centers aligned with the new lattice.
pub fn calculate_extension(config: &GridConfig, step: usize, max_dimension: usize) -> ExtensionInfo {
    let rows_added = capped_growth(config.rows, step, max_dimension);
    let cols_added = capped_growth(config.cols, step, max_dimension);

    ExtensionInfo {
        new_config: GridConfig {
            rows: config.rows + rows_added,
            cols: config.cols + cols_added,
            tile_size: config.tile_size,
        },
        rows_added,
        cols_added,
        capped: rows_added < step || cols_added < step,
    }
}

fn capped_growth(current: usize, step: usize, max_dimension: usize) -> usize {
    let room = max_dimension.saturating_sub(current);
    let allowed = step.min(room);
    allowed - allowed % 2
}
