//! Feature placement bookkeeping
//!
//! A [`FeatureSet`] records which tile centers host a feature. Entries are
//! deduplicated by [`CellKey`] and kept in insertion order for rendering.
//! The set only ever grows.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::algorithm::bitset::TileMask;
use crate::spatial::{CellKey, Coordinate, Lattice, Tile};

/// Result of asking for a feature at a coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A new feature was recorded
    Added,
    /// The tile already hosts a feature; nothing changed
    AlreadyPresent,
    /// The coordinate is not a tile center of the current lattice; nothing changed
    OffLattice,
}

/// Deduplicated, insertion-ordered set of occupied tile centers
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSet {
    tile_size: f64,
    entries: Vec<Coordinate>,
    keys: HashSet<CellKey>,
}

impl FeatureSet {
    /// Create an empty set for a lattice with the given tile size
    pub fn new(tile_size: f64) -> Self {
        Self {
            tile_size,
            entries: Vec::new(),
            keys: HashSet::new(),
        }
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no features have been placed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Feature positions in insertion order
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.entries
    }

    /// Keys of all occupied tiles
    pub fn keys(&self) -> impl Iterator<Item = CellKey> + '_ {
        self.entries.iter().map(|c| c.key(self.tile_size))
    }

    /// Check whether the tile at `coordinate` hosts a feature
    ///
    /// Only x and z are compared.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.keys.contains(&coordinate.key(self.tile_size))
    }

    /// Place a feature on the tile centered at `coordinate`
    ///
    /// Idempotent: an occupied tile is left untouched. Coordinates that do
    /// not name a tile of `lattice` are refused so the set never holds
    /// orphans.
    pub fn add_feature(&mut self, lattice: &Lattice, coordinate: Coordinate) -> Placement {
        let Some(tile) = lattice.locate(coordinate.x, coordinate.z) else {
            warn!(%coordinate, "ignoring feature outside the lattice");
            return Placement::OffLattice;
        };
        let placement = self.insert_tile(tile);
        if placement == Placement::Added {
            debug!(row = tile.row, col = tile.col, "feature placed");
        }
        placement
    }

    /// Consuming form of [`FeatureSet::add_feature`]
    #[must_use]
    pub fn with_feature(mut self, lattice: &Lattice, coordinate: Coordinate) -> Self {
        self.add_feature(lattice, coordinate);
        self
    }

    /// Record a feature on a tile known to belong to the current lattice
    pub fn insert_tile(&mut self, tile: &Tile) -> Placement {
        if self.keys.insert(tile.position.key(self.tile_size)) {
            self.entries.push(tile.position);
            Placement::Added
        } else {
            Placement::AlreadyPresent
        }
    }

    /// Mask of occupied tiles over the row-major indices of `lattice`
    pub fn occupied_mask(&self, lattice: &Lattice) -> TileMask {
        TileMask::from_indices(
            self.keys.iter().filter_map(|&key| lattice.index_of(key)),
            lattice.len(),
        )
    }
}
