//! Spatial data structures for the tile lattice
//!
//! This module contains:
//! - World coordinates and exact tile-center keys
//! - Lattice generation and lookup
//! - Growth arithmetic for expanding the lattice

/// World coordinates and tile-center identity
pub mod coordinate;
/// Lattice growth under a dimension cap
pub mod extension;
/// Lattice generation, lookup and occupancy masks
pub mod lattice;

pub use coordinate::{CellKey, Coordinate};
pub use lattice::{GridConfig, Lattice, Tile};
