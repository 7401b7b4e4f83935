//! World-space positions and the integer identity of tile centers
//!
//! Tile centers always fall on half-tile multiples of the tile size, so a
//! center can be keyed exactly by counting half tiles from the origin. Keys
//! stay valid when the lattice is regenerated at a larger size, which is what
//! lets features survive growth without tracking tile indices.

use std::fmt;

/// World-space position of a tile center or feature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Horizontal position along the lattice columns
    pub x: f64,
    /// Height of the ground plane
    pub y: f64,
    /// Depth position along the lattice rows
    pub z: f64,
}

impl Coordinate {
    /// Create a coordinate from its three components
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Exact lattice identity of this position for the given tile size
    ///
    /// The height component is ignored.
    pub fn key(&self, tile_size: f64) -> CellKey {
        CellKey {
            x: (2.0 * self.x / tile_size).round() as i64,
            z: (2.0 * self.z / tile_size).round() as i64,
        }
    }

    /// Components as an `[x, y, z]` array for the render hand-off
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Integer identity of a tile center measured in half tiles from the origin
///
/// Two coordinates share a key exactly when they name the same tile center
/// on the x/z plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Half-tile count along x
    pub x: i64,
    /// Half-tile count along z
    pub z: i64,
}
