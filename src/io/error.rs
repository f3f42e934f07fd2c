//! Error types for catalog, placement and session operations

use std::fmt;
use std::path::PathBuf;

use crate::catalog::edges::{Direction, EdgeClass, EdgeSet};
use crate::engine::placement::PlacementKey;
use crate::spatial::grid::GridCell;

/// Main error type for all editor operations
///
/// Every variant is recoverable: an operation that fails leaves the catalog,
/// the placement engine and the interaction state exactly as they were.
#[derive(Debug)]
pub enum EditorError {
    /// Catalog already holds a definition with the same four edges
    DuplicateDefinition {
        /// Identifier of the definition that already carries these edges
        existing: String,
        /// The rejected edge tuple
        edges: EdgeSet,
    },

    /// Cell already holds a placed tile
    OccupiedCell {
        /// Cell that was targeted
        cell: GridCell,
        /// Key of the placement occupying the cell
        occupant: PlacementKey,
    },

    /// A neighbor's facing edge disagrees with the candidate
    EdgeMismatch {
        /// Cell that was targeted
        cell: GridCell,
        /// Side of the candidate on which the mismatch was found
        direction: Direction,
        /// Label the neighbor presents toward the candidate
        expected: EdgeClass,
        /// Label the candidate presents toward the neighbor
        found: EdgeClass,
    },

    /// Cell lies outside the current grid dimensions
    OutOfBounds {
        /// Cell that was targeted
        cell: GridCell,
        /// Current column count
        cols: usize,
        /// Current row count
        rows: usize,
    },

    /// No placement occupies the cell
    NotFound {
        /// Cell that was targeted
        cell: GridCell,
    },

    /// Catalog has no definition with this identifier
    UnknownTile {
        /// The identifier that was requested
        id: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Session script line could not be understood
    Script {
        /// 1-based line number
        line: usize,
        /// What is wrong with the line
        reason: String,
    },

    /// Failed to save a rendered board to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl EditorError {
    /// Whether this error is a placement rejection that the interaction
    /// layer discards without surfacing to the user
    pub const fn is_placement_rejection(&self) -> bool {
        matches!(
            self,
            Self::OccupiedCell { .. } | Self::EdgeMismatch { .. } | Self::OutOfBounds { .. }
        )
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateDefinition { existing, edges } => {
                write!(f, "Duplicate tile: edges {edges} already defined by '{existing}'")
            }
            Self::OccupiedCell { cell, occupant } => {
                write!(f, "Cell {cell} is already occupied by placement {occupant}")
            }
            Self::EdgeMismatch {
                cell,
                direction,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Edge mismatch at {cell} facing {direction}: neighbor shows {expected}, tile shows {found}"
                )
            }
            Self::OutOfBounds { cell, cols, rows } => {
                write!(f, "Cell {cell} is outside the {cols}x{rows} grid")
            }
            Self::NotFound { cell } => write!(f, "No tile placed at {cell}"),
            Self::UnknownTile { id } => write!(f, "Unknown tile '{id}'"),
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Script { line, reason } => write!(f, "Script error on line {line}: {reason}"),
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for EditorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for editor results
pub type Result<T> = std::result::Result<T, EditorError>;

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> EditorError {
    EditorError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a script error for the given 1-based line
pub fn script_error(line: usize, reason: &impl ToString) -> EditorError {
    EditorError::Script {
        line,
        reason: reason.to_string(),
    }
}
