//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use wangtile::EditorError;
    use wangtile::catalog::edges::{Direction, EdgeClass, EdgeSet};
    use wangtile::io::error::{invalid_parameter, script_error};
    use wangtile::spatial::grid::GridCell;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = EditorError::FileSystem {
            path: "/tmp/session.txt".into(),
            operation: "read script",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("read script"));
        assert!(!error.is_placement_rejection());
    }

    #[test]
    fn test_edge_mismatch_message_names_both_labels() -> wangtile::Result<()> {
        let error = EditorError::EdgeMismatch {
            cell: GridCell::new(1, 0),
            direction: Direction::West,
            expected: EdgeClass::new(1)?,
            found: EdgeClass::new(0)?,
        };

        let message = error.to_string();
        assert!(message.contains("(1, 0)"));
        assert!(message.contains("west"));
        assert!(message.contains("neighbor shows 1"));
        assert!(message.contains("tile shows 0"));
        assert!(error.source().is_none());
        Ok(())
    }

    // Tests only placement refusals are classified as silent rejections
    #[test]
    fn test_placement_rejection_classification() -> wangtile::Result<()> {
        let out_of_bounds = EditorError::OutOfBounds {
            cell: GridCell::new(10, 0),
            cols: 10,
            rows: 10,
        };
        let not_found = EditorError::NotFound {
            cell: GridCell::new(0, 0),
        };
        let duplicate = EditorError::DuplicateDefinition {
            existing: "A".to_string(),
            edges: EdgeSet::from_values([0, 1, 2, 1])?,
        };

        assert!(out_of_bounds.is_placement_rejection());
        assert!(out_of_bounds.to_string().contains("10x10"));
        assert!(!not_found.is_placement_rejection());
        assert!(!duplicate.is_placement_rejection());
        assert!(duplicate.to_string().contains("{n:0,e:1,s:2,w:1}"));
        Ok(())
    }

    #[test]
    fn test_helper_constructors() {
        let error = invalid_parameter("cols", &25, &"must be between 2 and 20");
        let message = error.to_string();
        assert!(message.contains("cols"));
        assert!(message.contains("25"));
        assert!(message.contains("must be between 2 and 20"));

        let error = script_error(7, &"unknown command 'jump'");
        assert_eq!(
            error.to_string(),
            "Script error on line 7: unknown command 'jump'"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let error: EditorError = std::io::Error::other("boom").into();
        assert!(matches!(error, EditorError::FileSystem { .. }));
        assert!(error.source().is_some());
    }
}
