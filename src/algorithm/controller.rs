use tracing::{debug, info, warn};

use crate::algorithm::boundary::BoundaryPolicy;
use crate::algorithm::features::{FeatureSet, Placement};
use crate::algorithm::pan::{PanOffset, PanTracker};
use crate::algorithm::sampling::FeatureSampler;
use crate::io::configuration::{SceneConfig, TILE_HEIGHT};
use crate::io::error::Result;
use crate::io::events::PointerEvent;
use crate::io::snapshot::SceneSnapshot;
use crate::spatial::extension::calculate_extension;
use crate::spatial::{Coordinate, Lattice};

/// What a single input event did to the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventOutcome {
    /// A drag began
    DragStarted,
    /// A drag ended
    DragEnded,
    /// The event had no effect (e.g. a move while not dragging)
    Ignored,
    /// The offset moved within the current lattice
    Panned(PanOffset),
    /// The lattice grew, then the offset moved
    Expanded(PanOffset),
    /// A tile click was processed
    Clicked(Placement),
}

/// Single owner of all scene state
///
/// Every mutation happens synchronously inside one of the event handlers:
/// the lattice only grows, the feature set only grows, and the committed
/// offset always lies inside the extent the boundary policy allows.
pub struct SceneController {
    config: SceneConfig,
    lattice: Lattice,
    features: FeatureSet,
    tracker: PanTracker,
    sampler: FeatureSampler,
    growth_count: usize,
}

impl SceneController {
    /// Build a scene: generate the lattice and sample the initial features
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation
    pub fn new(config: SceneConfig) -> Result<Self> {
        config.validate()?;

        let lattice = Lattice::new(config.grid);
        let mut sampler = FeatureSampler::new(config.seed);
        let features = sampler.sample_initial(&lattice, config.feature_fraction);

        info!(
            rows = lattice.rows(),
            cols = lattice.cols(),
            tile_size = lattice.tile_size(),
            features = features.len(),
            "scene initialized"
        );

        Ok(Self {
            config,
            lattice,
            features,
            tracker: PanTracker::new(),
            sampler,
            growth_count: 0,
        })
    }

    /// Configuration the scene was built from
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Current lattice
    pub const fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Placed features
    pub const fn features(&self) -> &FeatureSet {
        &self.features
    }

    /// Committed pan offset
    pub const fn offset(&self) -> PanOffset {
        self.tracker.offset()
    }

    /// Whether a drag is in progress
    pub const fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Active boundary strategy
    pub const fn policy(&self) -> &BoundaryPolicy {
        &self.config.policy
    }

    /// Number of times the lattice has grown
    pub const fn growth_count(&self) -> usize {
        self.growth_count
    }

    /// Apply one input event
    pub fn handle(&mut self, event: PointerEvent) -> EventOutcome {
        match event {
            PointerEvent::PointerDown { x, y } => {
                self.pointer_down([x, y]);
                if self.is_dragging() {
                    EventOutcome::DragStarted
                } else {
                    EventOutcome::Ignored
                }
            }
            PointerEvent::PointerMove { x, y } => self.pointer_move([x, y]),
            PointerEvent::PointerUp => {
                self.pointer_up();
                EventOutcome::DragEnded
            }
            PointerEvent::PointerLeave => {
                self.pointer_leave();
                EventOutcome::DragEnded
            }
            PointerEvent::TileClick { x, z } => EventOutcome::Clicked(self.tile_click(x, z)),
        }
    }

    /// Begin dragging at screen position `pos`
    pub fn pointer_down(&mut self, pos: [f64; 2]) {
        self.tracker.pointer_down(pos);
    }

    /// Drag to screen position `pos`, growing the lattice if the policy asks
    ///
    /// Grows at most once per call. When growth is refused by the dimension
    /// cap the offset is clamped to the current extent instead.
    pub fn pointer_move(&mut self, pos: [f64; 2]) -> EventOutcome {
        let Some(candidate) = self.tracker.pointer_move(pos) else {
            return EventOutcome::Ignored;
        };

        let resolution = self.config.policy.resolve(candidate, self.lattice.config());
        let outcome = if resolution.grow && self.grow() {
            EventOutcome::Expanded(self.config.policy.clamp(candidate, self.lattice.config()))
        } else {
            EventOutcome::Panned(resolution.offset)
        };

        if let EventOutcome::Panned(offset) | EventOutcome::Expanded(offset) = outcome {
            self.tracker.commit(offset);
        }
        outcome
    }

    /// End the drag
    pub const fn pointer_up(&mut self) {
        self.tracker.pointer_up();
    }

    /// End the drag because the pointer left the surface
    pub const fn pointer_leave(&mut self) {
        self.tracker.pointer_leave();
    }

    /// Place a feature on the clicked tile center
    pub fn tile_click(&mut self, x: f64, z: f64) -> Placement {
        self.features
            .add_feature(&self.lattice, Coordinate::new(x, TILE_HEIGHT, z))
    }

    // Returns false when the policy never grows or the cap leaves no room
    fn grow(&mut self) -> bool {
        let step = self.config.policy.step();
        if step == 0 {
            return false;
        }
        let extension =
            calculate_extension(self.lattice.config(), step, self.config.max_dimension);
        if !extension.grew() {
            warn!(
                rows = self.lattice.rows(),
                cols = self.lattice.cols(),
                max_dimension = self.config.max_dimension,
                "lattice growth refused at dimension cap"
            );
            return false;
        }

        self.lattice = Lattice::new(extension.new_config);
        let added = self.sampler.grow_features(
            &mut self.features,
            &self.lattice,
            self.config.feature_fraction,
        );
        self.growth_count += 1;

        debug!(
            rows = self.lattice.rows(),
            cols = self.lattice.cols(),
            capped = extension.capped,
            added,
            "lattice grown"
        );
        true
    }

    /// Render hand-off record of the current state
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(&self.lattice, &self.features, self.offset())
    }
}
