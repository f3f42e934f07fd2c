//! Pointer coordinate to grid cell mapping
//!
//! The canvas is always square, sized to the larger grid dimension. The
//! narrower dimension is centered, so each axis carries its own offset.

use crate::io::configuration::MAX_CELL_SIZE;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::{GridCell, GridConfig};

/// Map a pointer position to the grid cell beneath it
///
/// Uses floor division, so positions left of or above the grid produce
/// negative indices. The result is not bounds-checked. Infinite and huge
/// positions saturate at the `i32` limits; a NaN axis maps to `i32::MIN` so
/// it can never land inside a grid.
pub fn to_cell(
    pointer_x: f64,
    pointer_y: f64,
    offset_x: f64,
    offset_y: f64,
    cell_size: f64,
) -> GridCell {
    GridCell::new(
        axis_index(pointer_x, offset_x, cell_size),
        axis_index(pointer_y, offset_y, cell_size),
    )
}

fn axis_index(pointer: f64, offset: f64, cell_size: f64) -> i32 {
    let index = ((pointer - offset) / cell_size).floor();
    if index.is_nan() { i32::MIN } else { index as i32 }
}

/// Offset that centers `dimension` cells inside `larger` cells
pub fn centering_offset(dimension: usize, larger: usize, cell_size: f64) -> f64 {
    (larger as f64 * cell_size - dimension as f64 * cell_size) / 2.0
}

/// Precomputed canvas geometry for one grid configuration
///
/// Rebuild it whenever the grid dimensions change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    cell_size: f64,
    offset_x: f64,
    offset_y: f64,
    canvas_size: f64,
}

impl CoordinateMapper {
    /// Compute offsets and canvas size for a grid
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `cell_size` is not positive, exceeds
    /// [`MAX_CELL_SIZE`], or is NaN
    pub fn new(grid: GridConfig, cell_size: f64) -> Result<Self> {
        if cell_size.is_nan() || cell_size <= 0.0 || cell_size > MAX_CELL_SIZE {
            return Err(invalid_parameter(
                "cell_size",
                &cell_size,
                &format!("must be positive and at most {MAX_CELL_SIZE}"),
            ));
        }

        let larger = grid.larger_dimension();
        Ok(Self {
            cell_size,
            offset_x: centering_offset(grid.cols(), larger, cell_size),
            offset_y: centering_offset(grid.rows(), larger, cell_size),
            canvas_size: larger as f64 * cell_size,
        })
    }

    /// Cell beneath a canvas-local pointer position
    pub fn cell_at(&self, pointer_x: f64, pointer_y: f64) -> GridCell {
        to_cell(
            pointer_x,
            pointer_y,
            self.offset_x,
            self.offset_y,
            self.cell_size,
        )
    }

    /// Canvas position of a cell's top-left corner
    pub fn cell_origin(&self, cell: GridCell) -> (f64, f64) {
        (
            self.offset_x + f64::from(cell.x) * self.cell_size,
            self.offset_y + f64::from(cell.y) * self.cell_size,
        )
    }

    /// Side length of one cell
    pub const fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Horizontal centering offset
    pub const fn offset_x(&self) -> f64 {
        self.offset_x
    }

    /// Vertical centering offset
    pub const fn offset_y(&self) -> f64 {
        self.offset_y
    }

    /// Side length of the square canvas
    pub const fn canvas_size(&self) -> f64 {
        self.canvas_size
    }
}
