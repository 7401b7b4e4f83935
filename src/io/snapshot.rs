//! Render hand-off: the lattice, features and offset as plain records

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::algorithm::features::FeatureSet;
use crate::algorithm::pan::PanOffset;
use crate::io::configuration::FEATURE_SCALE;
use crate::io::error::{Result, SceneError, file_system_error};
use crate::spatial::Lattice;

/// One tile as consumed by the renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
    /// World-space center `[x, y, z]`
    pub position: [f64; 3],
    /// Edge length
    pub size: f64,
}

/// Complete renderable state of a scene at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    /// Lattice rows
    pub rows: usize,
    /// Lattice columns
    pub cols: usize,
    /// Tile edge length
    pub tile_size: f64,
    /// Pan offset `[x, z]` applied to the whole lattice
    pub offset: [f64; 2],
    /// Rest scale of feature props
    pub feature_scale: f64,
    /// Tiles in row-major order
    pub tiles: Vec<TileRecord>,
    /// Feature positions in placement order
    pub features: Vec<[f64; 3]>,
}

impl SceneSnapshot {
    /// Capture the current state
    pub fn capture(lattice: &Lattice, features: &FeatureSet, offset: PanOffset) -> Self {
        let tiles = lattice
            .tiles()
            .iter()
            .map(|tile| TileRecord {
                row: tile.row,
                col: tile.col,
                position: tile.position.to_array(),
                size: lattice.tile_size(),
            })
            .collect();

        Self {
            rows: lattice.rows(),
            cols: lattice.cols(),
            tile_size: lattice.tile_size(),
            offset: [offset.x, offset.z],
            feature_scale: FEATURE_SCALE,
            tiles,
            features: features.coordinates().iter().map(|c| c.to_array()).collect(),
        }
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| SceneError::Serialization {
            operation: "snapshot export",
            source: e,
        })
    }

    /// Write the snapshot as JSON, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| file_system_error(parent, "create directory", e))?;
        }
        std::fs::write(path, json).map_err(|e| file_system_error(path, "write snapshot", e))
    }
}
