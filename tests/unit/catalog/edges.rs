//! Tests for edge classes, compass directions and edge matching

#[cfg(test)]
mod tests {
    use wangtile::catalog::edges::{Direction, EdgeClass, EdgeSet};
    use wangtile::io::configuration::EDGE_CLASS_COUNT;
    use wangtile::{EditorError, Result};

    // Tests every value of the alphabet is accepted and the first value past it is not
    // Verified by changing the comparison to less-or-equal
    #[test]
    fn test_edge_class_respects_alphabet_size() {
        for value in 0..EDGE_CLASS_COUNT as u8 {
            assert!(EdgeClass::new(value).is_ok(), "{value} should be accepted");
        }

        let result = EdgeClass::new(EDGE_CLASS_COUNT as u8);
        assert!(matches!(
            result,
            Err(EditorError::InvalidParameter {
                parameter: "edge_class",
                ..
            })
        ));
    }

    #[test]
    fn test_opposite_pairs_are_symmetric() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::East.opposite(), Direction::West);

        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0), "{direction} offsets must cancel");
        }
    }

    // Tests y grows downward so north is the previous row
    #[test]
    fn test_direction_offsets_use_screen_orientation() {
        assert_eq!(Direction::North.offset(), (0, -1));
        assert_eq!(Direction::East.offset(), (1, 0));
        assert_eq!(Direction::South.offset(), (0, 1));
        assert_eq!(Direction::West.offset(), (-1, 0));
    }

    #[test]
    fn test_from_values_keeps_direction_order() -> Result<()> {
        let edges = EdgeSet::from_values([0, 1, 2, 3])?;

        assert_eq!(edges.get(Direction::North).value(), 0);
        assert_eq!(edges.get(Direction::East).value(), 1);
        assert_eq!(edges.get(Direction::South).value(), 2);
        assert_eq!(edges.get(Direction::West).value(), 3);
        assert_eq!(
            edges.to_array().map(EdgeClass::value),
            [0, 1, 2, 3]
        );
        Ok(())
    }

    #[test]
    fn test_from_values_rejects_any_bad_side() {
        assert!(EdgeSet::from_values([0, 0, 0, 9]).is_err());
        assert!(EdgeSet::from_values([9, 0, 0, 0]).is_err());
    }

    // Tests matching compares the candidate side with the neighbor's opposite side
    // Verified by comparing same-side labels instead
    #[test]
    fn test_matches_compares_facing_sides() -> Result<()> {
        let a = EdgeSet::from_values([0, 1, 2, 1])?;
        let east_neighbor = EdgeSet::from_values([3, 3, 3, 1])?;
        let wrong_neighbor = EdgeSet::from_values([1, 1, 1, 0])?;

        assert!(a.matches(Direction::East, &east_neighbor));
        assert!(!a.matches(Direction::East, &wrong_neighbor));

        // A neighbor to the south must show A's south label on its north side
        let south_neighbor = EdgeSet::from_values([2, 0, 1, 0])?;
        assert!(a.matches(Direction::South, &south_neighbor));
        assert!(!a.matches(Direction::North, &south_neighbor));
        Ok(())
    }

    #[test]
    fn test_edge_set_display() -> Result<()> {
        let edges = EdgeSet::from_values([0, 1, 2, 1])?;
        assert_eq!(edges.to_string(), "{n:0,e:1,s:2,w:1}");
        assert_eq!(Direction::West.to_string(), "west");
        Ok(())
    }
}
