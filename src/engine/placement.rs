//! Placement validation and board mutation
//!
//! The engine owns every placed tile. A candidate is accepted only when its
//! cell lies inside the supplied bounds, the cell is free, and each existing
//! orthogonal neighbor shows a label equal to the candidate's facing label.
//! Mutations are atomic: a failed operation leaves the board untouched.

use std::fmt;

use tracing::debug;

use crate::catalog::definitions::TileDefinition;
use crate::catalog::edges::Direction;
use crate::engine::occupancy::OccupancyGrid;
use crate::io::error::{EditorError, Result};
use crate::spatial::grid::{GridCell, GridConfig};

/// Session-unique identifier of one placement
///
/// Keys come from a monotonic counter and are never reused, not even after
/// the board is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlacementKey(u64);

impl PlacementKey {
    /// Raw counter value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlacementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A tile committed to a cell
///
/// Never changed in place; moving a tile means removing it and placing a
/// new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedTile {
    key: PlacementKey,
    cell: GridCell,
    tile: TileDefinition,
}

impl PlacedTile {
    /// Unique key of this placement
    pub const fn key(&self) -> PlacementKey {
        self.key
    }

    /// Cell the tile occupies
    pub const fn cell(&self) -> GridCell {
        self.cell
    }

    /// Definition the tile was placed from
    pub const fn tile(&self) -> &TileDefinition {
        &self.tile
    }
}

/// Owner of the placed tiles and arbiter of edge-matching rules
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    board: OccupancyGrid,
    /// Occupied cells in placement order, for drawing
    order: Vec<GridCell>,
    next_key: u64,
}

impl PlacementEngine {
    /// Create an engine with an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Placed tiles in the order they were committed
    pub fn placements(&self) -> impl Iterator<Item = &PlacedTile> + '_ {
        self.order.iter().filter_map(|cell| self.board.get(*cell))
    }

    /// Placement occupying a cell, if any
    pub fn tile_at(&self, cell: GridCell) -> Option<&PlacedTile> {
        self.board.get(cell)
    }

    /// Whether a cell holds a tile
    pub fn is_occupied(&self, cell: GridCell) -> bool {
        self.board.get(cell).is_some()
    }

    /// Number of placed tiles
    pub const fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the board is empty
    pub const fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Decide whether `tile` may occupy `cell`, explaining any refusal
    ///
    /// Checks run in a fixed order: bounds, occupancy, then the four
    /// neighbors north, east, south, west. Neighbors are consulted even when
    /// they lie outside `bounds`, which happens after the grid shrinks.
    ///
    /// # Errors
    ///
    /// - `OutOfBounds` if `cell` is outside `bounds`
    /// - `OccupiedCell` if another tile already sits on `cell`
    /// - `EdgeMismatch` for the first neighbor whose facing label differs
    pub fn check_placement(
        &self,
        cell: GridCell,
        tile: &TileDefinition,
        bounds: &GridConfig,
    ) -> Result<()> {
        if !bounds.contains(cell) {
            return Err(EditorError::OutOfBounds {
                cell,
                cols: bounds.cols(),
                rows: bounds.rows(),
            });
        }

        if let Some(occupant) = self.board.get(cell) {
            return Err(EditorError::OccupiedCell {
                cell,
                occupant: occupant.key,
            });
        }

        for direction in Direction::ALL {
            let Some(neighbor) = self.board.get(cell.neighbor(direction)) else {
                continue;
            };

            if !tile.edges().matches(direction, neighbor.tile.edges()) {
                return Err(EditorError::EdgeMismatch {
                    cell,
                    direction,
                    expected: neighbor.tile.edges().get(direction.opposite()),
                    found: tile.edges().get(direction),
                });
            }
        }

        Ok(())
    }

    /// Whether `tile` may occupy `cell` right now
    pub fn can_place(&self, cell: GridCell, tile: &TileDefinition, bounds: &GridConfig) -> bool {
        self.check_placement(cell, tile, bounds).is_ok()
    }

    /// Commit `tile` to `cell`
    ///
    /// Always re-validates: an earlier successful check may be stale.
    ///
    /// # Errors
    ///
    /// Returns the same rejections as [`Self::check_placement`]; the board is
    /// unchanged on failure.
    pub fn place(
        &mut self,
        cell: GridCell,
        tile: &TileDefinition,
        bounds: &GridConfig,
    ) -> Result<PlacedTile> {
        if let Err(error) = self.check_placement(cell, tile, bounds) {
            debug!(%cell, tile = tile.id(), %error, "placement rejected");
            return Err(error);
        }

        let placed = PlacedTile {
            key: PlacementKey(self.next_key),
            cell,
            tile: tile.clone(),
        };

        // Bounds never exceed the storage square, so this only fails if the
        // bounds invariant of GridConfig is broken
        if let Err(rejected) = self.board.insert(placed.clone()) {
            return Err(EditorError::OutOfBounds {
                cell: rejected.cell,
                cols: bounds.cols(),
                rows: bounds.rows(),
            });
        }

        self.next_key += 1;
        self.order.push(cell);
        debug!(%cell, tile = tile.id(), key = %placed.key, "tile placed");
        Ok(placed)
    }

    /// Remove the tile occupying `cell`
    ///
    /// Remaining tiles are not re-validated: removal only ever drops
    /// constraints.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the cell is empty
    pub fn remove_at(&mut self, cell: GridCell) -> Result<PlacedTile> {
        let removed = self
            .board
            .remove(cell)
            .ok_or(EditorError::NotFound { cell })?;
        self.order.retain(|occupied| *occupied != cell);
        debug!(%cell, key = %removed.key, "tile removed");
        Ok(removed)
    }

    /// Remove every tile; returns how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.order.len();
        self.board.clear();
        self.order.clear();
        debug!(removed, "board cleared");
        removed
    }
}
