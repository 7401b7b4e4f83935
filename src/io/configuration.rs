//! Scene constants and runtime configuration defaults

use crate::algorithm::boundary::BoundaryPolicy;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::GridConfig;

/// Initial number of lattice rows
pub const DEFAULT_ROWS: usize = 40;
/// Initial number of lattice columns
pub const DEFAULT_COLS: usize = 40;
/// Edge length of a tile in world units
pub const DEFAULT_TILE_SIZE: f64 = 150.0;

/// Height of the ground plane every tile and feature sits on
pub const TILE_HEIGHT: f64 = -1.0;

/// Share of tiles that receive a random feature
pub const DEFAULT_FEATURE_FRACTION: f64 = 0.05;

// Clamp policy: offset may travel over half the lattice
/// Share of the lattice extent the pan offset may cover
pub const DEFAULT_PAN_FRACTION: f64 = 0.5;

// Expand policy; the step must be even to keep old centers on the lattice
/// Rows and columns added per growth
pub const DEFAULT_EXPANSION_STEP: usize = 40;
/// Growth threshold measured in tiles from the lattice edge
pub const DEFAULT_THRESHOLD_TILES: f64 = 5.0;

// Safety limit against runaway growth
/// Maximum allowed rows or columns
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// Fixed seed for reproducible feature placement
pub const DEFAULT_SEED: u64 = 42;

/// Rest scale of a placed feature, passed through to the renderer
pub const FEATURE_SCALE: f64 = 0.5;

// Output settings
/// Default snapshot file name
pub const DEFAULT_SNAPSHOT_PATH: &str = "scene_snapshot.json";
/// Edge length of one tile in the PNG preview
pub const PREVIEW_PIXELS_PER_TILE: u32 = 4;
/// Preview color of an empty tile
pub const PREVIEW_TILE_COLOR: [u8; 4] = [211, 211, 211, 255];
/// Preview color of a tile hosting a feature
pub const PREVIEW_FEATURE_COLOR: [u8; 4] = [34, 139, 34, 255];
/// Preview color of tile borders
pub const PREVIEW_BORDER_COLOR: [u8; 4] = [0, 0, 0, 255];

/// Everything needed to build a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Initial lattice dimensions and tile size
    pub grid: GridConfig,
    /// Share of tiles that receive a random feature
    pub feature_fraction: f64,
    /// Pan boundary strategy
    pub policy: BoundaryPolicy,
    /// Cap on rows and columns
    pub max_dimension: usize,
    /// Seed for feature sampling
    pub seed: u64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                rows: DEFAULT_ROWS,
                cols: DEFAULT_COLS,
                tile_size: DEFAULT_TILE_SIZE,
            },
            feature_fraction: DEFAULT_FEATURE_FRACTION,
            policy: BoundaryPolicy::Clamp {
                fraction: DEFAULT_PAN_FRACTION,
            },
            max_dimension: MAX_GRID_DIMENSION,
            seed: DEFAULT_SEED,
        }
    }
}

impl SceneConfig {
    /// Expansion policy with the default step and a threshold of
    /// [`DEFAULT_THRESHOLD_TILES`] tiles
    pub fn default_expand_policy(tile_size: f64) -> BoundaryPolicy {
        BoundaryPolicy::Expand {
            step: DEFAULT_EXPANSION_STEP,
            threshold: DEFAULT_THRESHOLD_TILES * tile_size,
        }
    }

    /// Check every setting before a scene is built
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The tile size is not a positive finite number
    /// - The feature fraction is outside `[0, 1]`
    /// - The dimension cap is zero or below the initial dimensions
    /// - A clamp fraction is negative or not finite
    /// - An expansion step is zero or odd, or a threshold is not positive
    pub fn validate(&self) -> Result<()> {
        GridConfig::new(self.grid.rows, self.grid.cols, self.grid.tile_size)?;

        if !(0.0..=1.0).contains(&self.feature_fraction) {
            return Err(invalid_parameter(
                "feature_fraction",
                &self.feature_fraction,
                &"must be between 0 and 1",
            ));
        }

        if self.max_dimension == 0 {
            return Err(invalid_parameter(
                "max_dimension",
                &self.max_dimension,
                &"must be positive",
            ));
        }

        let largest = self.grid.rows.max(self.grid.cols);
        if largest > self.max_dimension {
            return Err(invalid_parameter(
                "rows/cols",
                &largest,
                &format!("exceeds the maximum dimension {}", self.max_dimension),
            ));
        }

        match self.policy {
            BoundaryPolicy::Clamp { fraction } => {
                if !fraction.is_finite() || fraction < 0.0 {
                    return Err(invalid_parameter(
                        "pan_fraction",
                        &fraction,
                        &"must be a non-negative finite number",
                    ));
                }
            }
            BoundaryPolicy::Expand { step, threshold } => {
                if step == 0 || step % 2 != 0 {
                    return Err(invalid_parameter(
                        "step",
                        &step,
                        &"must be a positive even number",
                    ));
                }
                if !threshold.is_finite() || threshold <= 0.0 {
                    return Err(invalid_parameter(
                        "threshold",
                        &threshold,
                        &"must be a positive finite number",
                    ));
                }
            }
        }

        Ok(())
    }
}
