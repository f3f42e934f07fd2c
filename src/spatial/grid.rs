//! Grid cells and bounded grid dimensions
//!
//! Cells use signed coordinates so that pointer positions left of or above
//! the grid map to real (if unreachable) cells instead of wrapping around.

use std::fmt;

use crate::catalog::edges::Direction;
use crate::io::configuration::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION,
};
use crate::io::error::{Result, invalid_parameter};

/// Integer grid coordinates, `x` counting columns and `y` counting rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCell {
    /// Column index
    pub x: i32,
    /// Row index
    pub y: i32,
}

impl GridCell {
    /// Create a cell from column and row indices
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The orthogonally adjacent cell on the given side
    pub const fn neighbor(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Column and row count of the editing surface
///
/// Both dimensions are bounded to
/// [`MIN_GRID_DIMENSION`]`..=`[`MAX_GRID_DIMENSION`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    cols: usize,
    rows: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: DEFAULT_GRID_COLS,
            rows: DEFAULT_GRID_ROWS,
        }
    }
}

impl GridConfig {
    /// Create a grid configuration
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if either dimension is outside the permitted range
    pub fn new(cols: usize, rows: usize) -> Result<Self> {
        Self::check_dimension("cols", cols)?;
        Self::check_dimension("rows", rows)?;
        Ok(Self { cols, rows })
    }

    fn check_dimension(parameter: &'static str, value: usize) -> Result<()> {
        if (MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION).contains(&value) {
            Ok(())
        } else {
            Err(invalid_parameter(
                parameter,
                &value,
                &format!("must be between {MIN_GRID_DIMENSION} and {MAX_GRID_DIMENSION}"),
            ))
        }
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// The larger of the two dimensions, which sizes the square canvas
    pub const fn larger_dimension(&self) -> usize {
        if self.cols > self.rows {
            self.cols
        } else {
            self.rows
        }
    }

    /// Whether a cell lies inside `[0, cols) x [0, rows)`
    pub const fn contains(&self, cell: GridCell) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.cols
            && (cell.y as usize) < self.rows
    }
}
