//! Tile definitions available to the editor
//!
//! This module contains catalog-related functionality including:
//! - Edge classes, compass directions and edge tuples
//! - Tile definitions and the append-only tile catalog

/// Tile definitions and the session tile catalog
pub mod definitions;
/// Edge labels and edge matching between neighboring sides
pub mod edges;

pub use definitions::{TileCatalog, TileDefinition};
pub use edges::{Direction, EdgeClass, EdgeSet};
