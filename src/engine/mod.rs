//! Placement engine owning the board
//!
//! Validates candidate placements against edge-matching rules and applies
//! placements, removals and clears.

/// Dense coordinate-keyed storage of placed tiles
pub mod occupancy;
/// Edge-matching validation and board mutation
pub mod placement;

pub use placement::{PlacedTile, PlacementEngine, PlacementKey};
