//! Tests for deduplicated feature placement

#[cfg(test)]
mod tests {
    use tilefield::algorithm::features::{FeatureSet, Placement};
    use tilefield::spatial::{Coordinate, GridConfig, Lattice};

    fn lattice() -> Lattice {
        Lattice::new(GridConfig {
            rows: 4,
            cols: 4,
            tile_size: 150.0,
        })
    }

    // Tests a click on a free tile adds it
    // Verified by returning early before insertion
    #[test]
    fn test_add_feature() {
        let grid = lattice();
        let mut set = FeatureSet::new(150.0);
        let placement = set.add_feature(&grid, Coordinate::new(75.0, -1.0, -225.0));
        assert_eq!(placement, Placement::Added);
        assert_eq!(set.len(), 1);
        assert_eq!(set.coordinates().first().map(|c| c.to_array()), Some([75.0, -1.0, -225.0]));
    }

    // Tests adding twice leaves the set unchanged
    // Verified by skipping the key check
    #[test]
    fn test_add_feature_is_idempotent() {
        let grid = lattice();
        let c = Coordinate::new(-75.0, -1.0, 75.0);
        let once = FeatureSet::new(150.0).with_feature(&grid, c);
        let twice = once.clone().with_feature(&grid, c);
        assert_eq!(once, twice);

        let mut set = once;
        assert_eq!(set.add_feature(&grid, c), Placement::AlreadyPresent);
        assert_eq!(set.len(), 1);
    }

    // Tests the height component is ignored when matching
    // Verified by comparing full coordinates
    #[test]
    fn test_match_ignores_height() {
        let grid = lattice();
        let mut set = FeatureSet::new(150.0);
        set.add_feature(&grid, Coordinate::new(225.0, -1.0, 225.0));
        assert_eq!(
            set.add_feature(&grid, Coordinate::new(225.0, 7.0, 225.0)),
            Placement::AlreadyPresent
        );
        assert!(set.contains(&Coordinate::new(225.0, 0.0, 225.0)));
    }

    // Tests coordinates outside the lattice are refused
    // Verified by inserting without locating a tile
    #[test]
    fn test_off_lattice_refused() {
        let grid = lattice();
        let mut set = FeatureSet::new(150.0);
        assert_eq!(
            set.add_feature(&grid, Coordinate::new(375.0, -1.0, 75.0)),
            Placement::OffLattice
        );
        assert_eq!(
            set.add_feature(&grid, Coordinate::new(10.0, -1.0, 75.0)),
            Placement::OffLattice
        );
        assert!(set.is_empty());
    }

    // Tests insertion order is preserved
    // Verified by storing entries in a hash set
    #[test]
    fn test_insertion_order() {
        let grid = lattice();
        let mut set = FeatureSet::new(150.0);
        for tile in grid.tiles().iter().rev() {
            set.insert_tile(tile);
        }
        let first = set.coordinates().first().copied();
        assert_eq!(first, grid.tiles().last().map(|t| t.position));
        assert_eq!(set.keys().count(), 16);
    }

    // Tests the occupied mask follows lattice indices
    // Verified by marking by insertion position
    #[test]
    fn test_occupied_mask() {
        let grid = lattice();
        let mut set = FeatureSet::new(150.0);
        if let Some(tile) = grid.tile_at(2, 1) {
            set.insert_tile(tile);
        }
        let mask = set.occupied_mask(&grid);
        assert_eq!(mask.len(), 16);
        assert_eq!(mask.count(), 1);
        assert!(!mask.free_indices().contains(&9));
    }
}
