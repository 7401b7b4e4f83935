//! Pointer event scripts replayed against a scene
//!
//! A script is a JSON array of events tagged by `type`:
//!
//! ```json
//! [
//!   { "type": "pointer_down", "x": 10.0, "y": 10.0 },
//!   { "type": "pointer_move", "x": 60.0, "y": 40.0 },
//!   { "type": "pointer_up" },
//!   { "type": "tile_click", "x": -75.0, "z": 75.0 }
//! ]
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::io::error::{Result, SceneError, file_system_error};

/// One input event from the pointer layer or the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Button pressed at an absolute screen position
    PointerDown {
        /// Screen x
        x: f64,
        /// Screen y
        y: f64,
    },
    /// Pointer moved to an absolute screen position
    PointerMove {
        /// Screen x
        x: f64,
        /// Screen y
        y: f64,
    },
    /// Button released
    PointerUp,
    /// Pointer left the surface
    PointerLeave,
    /// Renderer reported a click on the tile centered at world `(x, z)`
    TileClick {
        /// World x of the tile center
        x: f64,
        /// World z of the tile center
        z: f64,
    },
}

/// Parse a JSON event script
///
/// # Errors
///
/// Returns the JSON error if the text is not a valid event array
pub fn parse_events(json: &str) -> serde_json::Result<Vec<PointerEvent>> {
    serde_json::from_str(json)
}

/// Read and parse an event script from disk
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not parse
pub fn load_events(path: &Path) -> Result<Vec<PointerEvent>> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| file_system_error(path, "read event script", e))?;
    parse_events(&text).map_err(|e| SceneError::EventScript {
        path: path.to_path_buf(),
        source: e,
    })
}
