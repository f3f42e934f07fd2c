//! Coordinate-keyed storage of placed tiles
//!
//! A dense grid sized to the largest permitted board gives constant-time
//! neighbor lookup. Cells outside that square can never be occupied.

use ndarray::Array2;

use crate::engine::placement::PlacedTile;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::spatial::grid::GridCell;

/// Dense cell-to-placement map covering `MAX_GRID_DIMENSION` squared cells
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    // Indexed by [row, col], i.e. [y, x]
    cells: Array2<Option<PlacedTile>>,
}

impl Default for OccupancyGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl OccupancyGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self {
            cells: Array2::from_elem((MAX_GRID_DIMENSION, MAX_GRID_DIMENSION), None),
        }
    }

    /// Placement occupying a cell; cells outside the storage square are empty
    pub fn get(&self, cell: GridCell) -> Option<&PlacedTile> {
        Self::slot(cell).and_then(|slot| self.cells.get(slot)?.as_ref())
    }

    /// Store a placement at its own cell
    ///
    /// Returns the placement back if the cell is outside the storage square
    /// or already occupied.
    pub fn insert(&mut self, placed: PlacedTile) -> Result<(), PlacedTile> {
        let Some(entry) = Self::slot(placed.cell()).and_then(|slot| self.cells.get_mut(slot))
        else {
            return Err(placed);
        };

        if entry.is_some() {
            return Err(placed);
        }

        *entry = Some(placed);
        Ok(())
    }

    /// Take the placement out of a cell
    pub fn remove(&mut self, cell: GridCell) -> Option<PlacedTile> {
        Self::slot(cell)
            .and_then(|slot| self.cells.get_mut(slot))
            .and_then(Option::take)
    }

    /// Empty every cell
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn slot(cell: GridCell) -> Option<[usize; 2]> {
        let col = usize::try_from(cell.x).ok()?;
        let row = usize::try_from(cell.y).ok()?;
        (col < MAX_GRID_DIMENSION && row < MAX_GRID_DIMENSION).then_some([row, col])
    }
}
