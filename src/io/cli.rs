//! Command-line interface for building a scene and replaying pointer input

use crate::algorithm::boundary::BoundaryPolicy;
use crate::algorithm::controller::SceneController;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_EXPANSION_STEP, DEFAULT_FEATURE_FRACTION, DEFAULT_PAN_FRACTION,
    DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_SNAPSHOT_PATH, DEFAULT_THRESHOLD_TILES, DEFAULT_TILE_SIZE,
    MAX_GRID_DIMENSION, SceneConfig,
};
use crate::io::error::Result;
use crate::io::events::load_events;
use crate::io::image::export_preview_png;
use crate::io::progress::ReplayProgress;
use crate::spatial::GridConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// Pan boundary strategy selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Clamp the offset to a fraction of the lattice
    Clamp,
    /// Grow the lattice when the offset nears the edge
    Expand,
}

#[derive(Parser, Debug)]
#[command(name = "tilefield")]
#[command(
    author,
    version,
    about = "Generate a tile lattice with random features and replay pointer input"
)]
/// Command-line arguments for the scene tool
pub struct Cli {
    /// Optional JSON pointer event script to replay
    #[arg(value_name = "EVENTS")]
    pub events: Option<PathBuf>,

    /// Initial number of rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Initial number of columns
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Tile edge length in world units
    #[arg(short = 't', long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: f64,

    /// Share of tiles that receive a random feature
    #[arg(short, long, default_value_t = DEFAULT_FEATURE_FRACTION)]
    pub fraction: f64,

    /// Random seed for reproducible placement
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Pan boundary strategy
    #[arg(short, long, value_enum, default_value_t = PolicyKind::Clamp)]
    pub policy: PolicyKind,

    /// Share of the lattice the offset may cover (clamp policy)
    #[arg(long, default_value_t = DEFAULT_PAN_FRACTION)]
    pub pan_fraction: f64,

    /// Rows and columns added per growth (expand policy, must be even)
    #[arg(long, default_value_t = DEFAULT_EXPANSION_STEP)]
    pub step: usize,

    /// Growth threshold in tiles from the edge (expand policy)
    #[arg(long, default_value_t = DEFAULT_THRESHOLD_TILES)]
    pub threshold_tiles: f64,

    /// Maximum rows or columns the lattice may reach
    #[arg(long, default_value_t = MAX_GRID_DIMENSION)]
    pub max_dimension: usize,

    /// Where to write the JSON scene snapshot
    #[arg(long, default_value = DEFAULT_SNAPSHOT_PATH)]
    pub snapshot: PathBuf,

    /// Optional PNG preview output
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Suppress progress output and informational logs
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter used when `RUST_LOG` is not set
    pub const fn default_log_filter(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Boundary policy selected by the arguments
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        match self.policy {
            PolicyKind::Clamp => BoundaryPolicy::Clamp {
                fraction: self.pan_fraction,
            },
            PolicyKind::Expand => BoundaryPolicy::Expand {
                step: self.step,
                threshold: self.threshold_tiles * self.tile_size,
            },
        }
    }

    /// Scene configuration assembled from the arguments (not yet validated)
    pub fn scene_config(&self) -> SceneConfig {
        SceneConfig {
            grid: GridConfig {
                rows: self.rows,
                cols: self.cols,
                tile_size: self.tile_size,
            },
            feature_fraction: self.fraction,
            policy: self.boundary_policy(),
            max_dimension: self.max_dimension,
            seed: self.seed,
        }
    }
}

/// Counts describing a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Events replayed
    pub events: usize,
    /// Lattice growths
    pub growths: usize,
    /// Features placed by clicks
    pub placements: usize,
    /// Features in the final scene
    pub features: usize,
    /// Final rows
    pub rows: usize,
    /// Final columns
    pub cols: usize,
}

/// Builds the scene, replays events and writes outputs
pub struct SceneRunner {
    cli: Cli,
}

impl SceneRunner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run according to the CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid
    /// - The event script cannot be read or parsed
    /// - The snapshot or preview cannot be written
    pub fn run(&self) -> Result<RunSummary> {
        let mut controller = SceneController::new(self.cli.scene_config())?;

        let events = match &self.cli.events {
            Some(path) => load_events(path)?,
            None => Vec::new(),
        };

        let mut progress = if self.cli.should_show_progress() && !events.is_empty() {
            ReplayProgress::new(events.len())
        } else {
            ReplayProgress::hidden()
        };
        for event in &events {
            let outcome = controller.handle(*event);
            progress.record(&outcome);
        }
        progress.finish();

        controller.snapshot().write_json(&self.cli.snapshot)?;
        if let Some(preview) = &self.cli.preview {
            export_preview_png(controller.lattice(), controller.features(), preview)?;
        }

        let summary = RunSummary {
            events: events.len(),
            growths: controller.growth_count(),
            placements: progress.placements(),
            features: controller.features().len(),
            rows: controller.lattice().rows(),
            cols: controller.lattice().cols(),
        };

        info!(
            events = summary.events,
            growths = summary.growths,
            placements = summary.placements,
            features = summary.features,
            rows = summary.rows,
            cols = summary.cols,
            snapshot = %self.cli.snapshot.display(),
            "scene written"
        );

        Ok(summary)
    }
}
