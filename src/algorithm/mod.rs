/// Tile index masks
pub mod bitset;
/// Pan boundary strategies
pub mod boundary;
/// Scene state owner and event handling
pub mod controller;
/// Deduplicated feature placement
pub mod features;
/// Drag tracking
pub mod pan;
/// Seeded feature sampling
pub mod sampling;
