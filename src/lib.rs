//! Procedural tile lattice with deduplicated random feature placement
//!
//! The lattice is a centered grid of square tiles. A seeded sampler places
//! features on a fixed share of tiles, user clicks add more, and dragging
//! pans the lattice under either a clamping or an expanding boundary policy.

#![forbid(unsafe_code)]

/// Scene state, feature sampling and pan handling
pub mod algorithm;
/// Input/output operations, configuration and error handling
pub mod io;
/// Lattice generation and coordinate identity
pub mod spatial;

pub use io::error::{Result, SceneError};
