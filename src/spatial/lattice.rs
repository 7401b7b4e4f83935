//! Rectangular tile lattice centered on the world origin
//!
//! Tiles are generated in row-major order with tile `(row, col)` at
//! `col * size - cols * size / 2 + size / 2` on x and the same formula over
//! rows on z, so the lattice is symmetric about both axes. The lattice is
//! always rebuilt from scratch; positional identity lives in [`CellKey`].

use ndarray::Array2;

use crate::io::configuration::TILE_HEIGHT;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::coordinate::{CellKey, Coordinate};

/// Relative distance (in tile sizes) under which a position counts as a tile center
pub const CENTER_TOLERANCE: f64 = 1e-6;

/// Lattice dimensions and tile size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of tile rows (z axis)
    pub rows: usize,
    /// Number of tile columns (x axis)
    pub cols: usize,
    /// Edge length of a square tile in world units
    pub tile_size: f64,
}

impl GridConfig {
    /// Create a validated configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is not a positive finite number
    pub fn new(rows: usize, cols: usize, tile_size: f64) -> Result<Self> {
        if !tile_size.is_finite() || tile_size <= 0.0 {
            return Err(invalid_parameter(
                "tile_size",
                &tile_size,
                &"must be a positive finite number",
            ));
        }
        Ok(Self {
            rows,
            cols,
            tile_size,
        })
    }

    /// Total number of tiles
    pub const fn tile_count(&self) -> usize {
        self.rows * self.cols
    }

    /// World extent along x
    pub fn width(&self) -> f64 {
        self.cols as f64 * self.tile_size
    }

    /// World extent along z
    pub fn depth(&self) -> f64 {
        self.rows as f64 * self.tile_size
    }
}

/// One lattice cell identified by its world-space center
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Row index (z axis)
    pub row: usize,
    /// Column index (x axis)
    pub col: usize,
    /// World-space center
    pub position: Coordinate,
}

/// Generate the full lattice in row-major order
///
/// Returns `rows * cols` tiles; an empty vector when either dimension is zero.
pub fn generate(rows: usize, cols: usize, tile_size: f64) -> Vec<Tile> {
    let half_width = cols as f64 * tile_size / 2.0;
    let half_depth = rows as f64 * tile_size / 2.0;
    let half_tile = tile_size / 2.0;

    let mut tiles = Vec::with_capacity(rows * cols);
    for row in 0..rows {
        let z = (row as f64).mul_add(tile_size, -half_depth) + half_tile;
        for col in 0..cols {
            let x = (col as f64).mul_add(tile_size, -half_width) + half_tile;
            tiles.push(Tile {
                row,
                col,
                position: Coordinate::new(x, TILE_HEIGHT, z),
            });
        }
    }
    tiles
}

/// Generated lattice together with the configuration it was built from
#[derive(Debug, Clone)]
pub struct Lattice {
    config: GridConfig,
    tiles: Vec<Tile>,
}

impl Lattice {
    /// Generate a lattice for the given configuration
    pub fn new(config: GridConfig) -> Self {
        let tiles = generate(config.rows, config.cols, config.tile_size);
        Self { config, tiles }
    }

    /// Configuration the lattice was generated from
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.config.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.config.cols
    }

    /// Tile edge length
    pub const fn tile_size(&self) -> f64 {
        self.config.tile_size
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the lattice has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at the given row and column
    pub fn tile_at(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows() || col >= self.cols() {
            return None;
        }
        self.tiles.get(row * self.cols() + col)
    }

    /// Row-major index of the tile with the given key
    pub fn index_of(&self, key: CellKey) -> Option<usize> {
        let col = axis_index(key.x, self.cols())?;
        let row = axis_index(key.z, self.rows())?;
        Some(row * self.cols() + col)
    }

    /// Tile whose center matches the given x/z position
    ///
    /// Positions that are not within [`CENTER_TOLERANCE`] of a center return `None`.
    pub fn locate(&self, x: f64, z: f64) -> Option<&Tile> {
        if !x.is_finite() || !z.is_finite() {
            return None;
        }
        let key = Coordinate::new(x, TILE_HEIGHT, z).key(self.tile_size());
        let tile = self.tiles.get(self.index_of(key)?)?;
        let tolerance = self.tile_size() * CENTER_TOLERANCE;
        ((tile.position.x - x).abs() <= tolerance && (tile.position.z - z).abs() <= tolerance)
            .then_some(tile)
    }

    /// Boolean mask (`rows` x `cols`) marking the tiles named by `keys`
    ///
    /// Keys that fall outside the lattice are skipped.
    pub fn occupancy<I>(&self, keys: I) -> Array2<bool>
    where
        I: IntoIterator<Item = CellKey>,
    {
        let mut mask = Array2::from_elem((self.rows(), self.cols()), false);
        for key in keys {
            if let Some(cell) = self
                .index_of(key)
                .and_then(|index| mask.get_mut([index / self.cols(), index % self.cols()]))
            {
                *cell = true;
            }
        }
        mask
    }
}

// Half-tile count along one axis is `2 * index - count + 1`
fn axis_index(half_tiles: i64, count: usize) -> Option<usize> {
    let doubled = half_tiles.checked_add(i64::try_from(count).ok()? - 1)?;
    if doubled < 0 || doubled % 2 != 0 {
        return None;
    }
    let index = (doubled / 2) as usize;
    (index < count).then_some(index)
}
