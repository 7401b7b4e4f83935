//! Tests for the PNG preview

#[cfg(test)]
mod tests {
    use tilefield::algorithm::features::FeatureSet;
    use tilefield::io::configuration::{
        PREVIEW_BORDER_COLOR, PREVIEW_FEATURE_COLOR, PREVIEW_PIXELS_PER_TILE, PREVIEW_TILE_COLOR,
    };
    use tilefield::io::image::{export_preview_png, render_preview};
    use tilefield::spatial::{GridConfig, Lattice};

    fn lattice(rows: usize, cols: usize) -> Lattice {
        Lattice::new(GridConfig {
            rows,
            cols,
            tile_size: 150.0,
        })
    }

    // Tests image size and per-tile colors
    // Verified by swapping rows and columns in the raster
    #[test]
    fn test_render_preview() {
        let grid = lattice(2, 3);
        let mut features = FeatureSet::new(150.0);
        if let Some(tile) = grid.tile_at(1, 2) {
            features.insert_tile(tile);
        }
        let Ok(img) = render_preview(&grid, &features) else {
            unreachable!("non-empty lattice failed to render");
        };

        let s = PREVIEW_PIXELS_PER_TILE;
        assert_eq!(img.dimensions(), (3 * s, 2 * s));
        assert_eq!(img.get_pixel(0, 0).0, PREVIEW_BORDER_COLOR);
        assert_eq!(img.get_pixel(1, 1).0, PREVIEW_TILE_COLOR);
        assert_eq!(img.get_pixel(2 * s + 1, s + 1).0, PREVIEW_FEATURE_COLOR);
    }

    // Tests an empty lattice is an error
    // Verified by rendering a zero-sized image
    #[test]
    fn test_render_empty_lattice() {
        assert!(render_preview(&lattice(0, 0), &FeatureSet::new(150.0)).is_err());
    }

    // Tests the PNG is written
    // Verified by disabling the save
    #[test]
    fn test_export_preview_png() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("preview.png");
        let result = export_preview_png(&lattice(4, 4), &FeatureSet::new(150.0), &path);
        assert!(result.is_ok());
        assert!(path.exists());
    }
}
