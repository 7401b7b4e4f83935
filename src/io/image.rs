//! Top-down PNG preview of the lattice with feature tiles highlighted

use crate::algorithm::features::FeatureSet;
use crate::io::configuration::{
    PREVIEW_BORDER_COLOR, PREVIEW_FEATURE_COLOR, PREVIEW_PIXELS_PER_TILE, PREVIEW_TILE_COLOR,
};
use crate::io::error::{SceneError, file_system_error};
use crate::spatial::Lattice;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

/// Rasterize the lattice, one `PREVIEW_PIXELS_PER_TILE` square per tile
///
/// Row 0 is drawn at the top. The first pixel row and column of each
/// tile form its border.
///
/// # Errors
///
/// Returns an error if the lattice has no tiles
pub fn render_preview(
    lattice: &Lattice,
    features: &FeatureSet,
) -> crate::io::error::Result<RgbaImage> {
    if lattice.is_empty() {
        return Err(SceneError::InvalidParameter {
            parameter: "lattice",
            value: format!("{}x{}", lattice.rows(), lattice.cols()),
            reason: "No tiles to render".to_string(),
        });
    }

    let occupancy = lattice.occupancy(features.keys());
    let scale = PREVIEW_PIXELS_PER_TILE;
    let width = lattice.cols() as u32 * scale;
    let height = lattice.rows() as u32 * scale;

    let img = ImageBuffer::from_fn(width, height, |px, py| {
        let (row, col) = ((py / scale) as usize, (px / scale) as usize);
        if px % scale == 0 || py % scale == 0 {
            Rgba(PREVIEW_BORDER_COLOR)
        } else if occupancy.get([row, col]).copied().unwrap_or(false) {
            Rgba(PREVIEW_FEATURE_COLOR)
        } else {
            Rgba(PREVIEW_TILE_COLOR)
        }
    });

    Ok(img)
}

/// Render and save the preview as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The lattice has no tiles
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview_png(
    lattice: &Lattice,
    features: &FeatureSet,
    output_path: &Path,
) -> crate::io::error::Result<()> {
    let img = render_preview(lattice, features)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| file_system_error(parent, "create directory", e))?;
    }

    img.save(output_path)
        .map_err(|e| SceneError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
