//! Spatial data structures and pointer mapping
//!
//! This module contains spatial-related functionality including:
//! - Grid cells and bounded grid dimensions
//! - Conversion between pointer coordinates and grid cells

/// Grid cells and grid configuration
pub mod grid;
/// Pointer coordinate to grid cell mapping with centering offsets
pub mod mapper;

pub use grid::{GridCell, GridConfig};
pub use mapper::CoordinateMapper;
