//! Tests for grid cells and bounded grid dimensions

#[cfg(test)]
mod tests {
    use wangtile::catalog::edges::Direction;
    use wangtile::io::configuration::{MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};
    use wangtile::spatial::grid::{GridCell, GridConfig};
    use wangtile::{EditorError, Result};

    #[test]
    fn test_default_grid_is_ten_by_ten() {
        let grid = GridConfig::default();
        assert_eq!((grid.cols(), grid.rows()), (10, 10));
    }

    // Tests both limits are inclusive and each dimension is checked
    // Verified by checking only cols
    #[test]
    fn test_grid_dimensions_are_bounded() {
        assert!(GridConfig::new(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION).is_ok());
        assert!(GridConfig::new(MIN_GRID_DIMENSION - 1, 10).is_err());
        assert!(GridConfig::new(10, MAX_GRID_DIMENSION + 1).is_err());

        match GridConfig::new(10, 1) {
            Err(EditorError::InvalidParameter { parameter, .. }) => assert_eq!(parameter, "rows"),
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn test_contains_is_half_open() -> Result<()> {
        let grid = GridConfig::new(10, 6)?;

        assert!(grid.contains(GridCell::new(0, 0)));
        assert!(grid.contains(GridCell::new(9, 5)));
        assert!(!grid.contains(GridCell::new(10, 0)));
        assert!(!grid.contains(GridCell::new(0, 6)));
        assert!(!grid.contains(GridCell::new(-1, 5)));
        assert!(!grid.contains(GridCell::new(3, -1)));
        Ok(())
    }

    #[test]
    fn test_larger_dimension() -> Result<()> {
        assert_eq!(GridConfig::new(4, 12)?.larger_dimension(), 12);
        assert_eq!(GridConfig::new(12, 4)?.larger_dimension(), 12);
        Ok(())
    }

    #[test]
    fn test_neighbor_follows_direction_offsets() {
        let cell = GridCell::new(3, 3);

        assert_eq!(cell.neighbor(Direction::North), GridCell::new(3, 2));
        assert_eq!(cell.neighbor(Direction::East), GridCell::new(4, 3));
        assert_eq!(cell.neighbor(Direction::South), GridCell::new(3, 4));
        assert_eq!(cell.neighbor(Direction::West), GridCell::new(2, 3));
        assert_eq!(GridCell::new(0, 0).neighbor(Direction::West), GridCell::new(-1, 0));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(GridCell::new(-1, 5).to_string(), "(-1, 5)");
    }
}
