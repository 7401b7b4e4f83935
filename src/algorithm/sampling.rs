//! Seeded random feature sampling without replacement
//!
//! Sampling shuffles candidate tile indices with a partial Fisher-Yates pass
//! and keeps the first `n`, so it always terminates and never draws a tile
//! twice. Growth samples only from tiles that are still free, leaving every
//! earlier feature where it was.

use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use tracing::debug;

use crate::algorithm::features::{FeatureSet, Placement};
use crate::spatial::Lattice;

/// Number of features a lattice of `tile_count` tiles should carry
///
/// `floor(tile_count * fraction)`, never more than `tile_count`. Fractions
/// that are not positive yield zero.
pub fn target_count(tile_count: usize, fraction: f64) -> usize {
    if fraction.is_nan() || fraction <= 0.0 {
        return 0;
    }
    ((tile_count as f64 * fraction).floor() as usize).min(tile_count)
}

/// Seeded sampler for initial and incremental feature placement
pub struct FeatureSampler {
    rng: StdRng,
}

impl FeatureSampler {
    /// Create a deterministic sampler
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Choose `amount` distinct values from `candidates`
    ///
    /// When `amount` meets or exceeds the pool every candidate is returned.
    pub fn choose(&mut self, mut candidates: Vec<usize>, amount: usize) -> Vec<usize> {
        let amount = amount.min(candidates.len());
        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, amount);
        chosen.to_vec()
    }

    /// Place `floor(|tiles| * fraction)` features on distinct random tiles
    pub fn sample_initial(&mut self, lattice: &Lattice, fraction: f64) -> FeatureSet {
        let mut features = FeatureSet::new(lattice.tile_size());
        let target = target_count(lattice.len(), fraction);

        for index in self.choose((0..lattice.len()).collect(), target) {
            if let Some(tile) = lattice.tiles().get(index) {
                features.insert_tile(tile);
            }
        }

        debug!(
            tiles = lattice.len(),
            features = features.len(),
            "initial features sampled"
        );
        features
    }

    /// Top up `features` to the target for a regenerated `lattice`
    ///
    /// Existing features, including user placements, count toward the target
    /// and are never re-rolled. New features are drawn only from free tiles.
    /// Returns the number of features added.
    pub fn grow_features(
        &mut self,
        features: &mut FeatureSet,
        lattice: &Lattice,
        fraction: f64,
    ) -> usize {
        let target = target_count(lattice.len(), fraction);
        let shortfall = target.saturating_sub(features.len());
        if shortfall == 0 {
            return 0;
        }

        let free = features.occupied_mask(lattice).free_indices();
        let mut added = 0;
        for index in self.choose(free, shortfall) {
            if let Some(tile) = lattice.tiles().get(index) {
                if features.insert_tile(tile) == Placement::Added {
                    added += 1;
                }
            }
        }

        debug!(added, total = features.len(), "features grown");
        added
    }
}
