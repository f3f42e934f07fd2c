//! Edge-matching Wang tile placement editor
//!
//! Tiles carry one edge label per side. A tile may be dropped on a grid cell
//! only if the cell is free and every orthogonal neighbor shows a matching
//! label on the shared edge. The crate provides the tile catalog, pointer to
//! cell mapping, the placement engine and the drag/click state machine, plus a
//! session replay CLI that renders boards to PNG.

#![forbid(unsafe_code)]

/// Tile definitions, edge classes and the tile catalog
pub mod catalog;
/// Placement engine owning the board
pub mod engine;
/// Drag, hover, release and click handling
pub mod interaction;
/// Input/output operations and error handling
pub mod io;
/// Grid cells, grid dimensions and coordinate mapping
pub mod spatial;

pub use io::error::{EditorError, Result};
