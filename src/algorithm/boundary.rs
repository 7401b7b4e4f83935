//! Boundary strategies for the pan offset
//!
//! A configuration picks exactly one strategy. `Clamp` pins the offset to a
//! fraction of the lattice; `Expand` grows the lattice when the offset nears
//! its edge and then clamps against the grown extent.

use crate::algorithm::pan::PanOffset;
use crate::spatial::GridConfig;

/// How a candidate pan offset is constrained
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoundaryPolicy {
    /// Fixed world: clamp each axis to `±extent * fraction / 2`
    Clamp {
        /// Share of the lattice extent the offset may travel over
        fraction: f64,
    },
    /// Expanding world: grow the lattice when within `threshold` of the edge
    Expand {
        /// Rows and columns added per growth
        step: usize,
        /// Distance from the edge, in world units, that triggers growth
        threshold: f64,
    },
}

/// Decision for one candidate offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    /// Offset clamped against the current extent
    pub offset: PanOffset,
    /// Whether the lattice should grow before the offset is committed
    pub grow: bool,
}

impl BoundaryPolicy {
    /// Largest offset magnitude allowed on `(x, z)` for `config`
    pub fn half_extent(&self, config: &GridConfig) -> (f64, f64) {
        match self {
            Self::Clamp { fraction } => (
                config.width() * fraction / 2.0,
                config.depth() * fraction / 2.0,
            ),
            Self::Expand { .. } => (config.width() / 2.0, config.depth() / 2.0),
        }
    }

    /// Clamp `offset` into the half extent of `config`
    pub fn clamp(&self, offset: PanOffset, config: &GridConfig) -> PanOffset {
        let (half_x, half_z) = self.half_extent(config);
        PanOffset::new(offset.x.clamp(-half_x, half_x), offset.z.clamp(-half_z, half_z))
    }

    /// Whether `candidate` is close enough to the edge to trigger growth
    ///
    /// Always `false` for `Clamp`.
    pub fn breaches(&self, candidate: PanOffset, config: &GridConfig) -> bool {
        match self {
            Self::Clamp { .. } => false,
            Self::Expand { threshold, .. } => {
                let (half_x, half_z) = self.half_extent(config);
                candidate.x.abs() > half_x - threshold || candidate.z.abs() > half_z - threshold
            }
        }
    }

    /// Rows and columns added per growth (zero for `Clamp`)
    pub const fn step(&self) -> usize {
        match self {
            Self::Clamp { .. } => 0,
            Self::Expand { step, .. } => *step,
        }
    }

    /// Evaluate a candidate offset against the current lattice
    pub fn resolve(&self, candidate: PanOffset, config: &GridConfig) -> Resolution {
        Resolution {
            offset: self.clamp(candidate, config),
            grow: self.breaches(candidate, config),
        }
    }
}
