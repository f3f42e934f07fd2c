//! Drag lifecycle states and derived hover status

use crate::catalog::definitions::TileDefinition;
use crate::spatial::grid::GridCell;

/// Position of the pointer in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    /// Horizontal canvas coordinate
    pub x: f64,
    /// Vertical canvas coordinate
    pub y: f64,
}

impl PointerPosition {
    /// Create a pointer position
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Interaction state: either nothing is held or one candidate is dragged
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No drag in progress
    #[default]
    Idle,
    /// A tile picked from the catalog is following the pointer
    Dragging {
        /// The tile that would be placed on release
        candidate: TileDefinition,
    },
}

impl InteractionState {
    /// The tile being dragged, if any
    pub const fn candidate(&self) -> Option<&TileDefinition> {
        match self {
            Self::Idle => None,
            Self::Dragging { candidate } => Some(candidate),
        }
    }

    /// Whether a drag is in progress
    pub const fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Start dragging `candidate`, replacing any previous candidate
    pub fn begin_drag(&mut self, candidate: TileDefinition) -> Option<TileDefinition> {
        std::mem::replace(self, Self::Dragging { candidate }).into_candidate()
    }

    /// Return to idle, handing back the candidate that was being dragged
    pub fn end_drag(&mut self) -> Option<TileDefinition> {
        std::mem::take(self).into_candidate()
    }

    fn into_candidate(self) -> Option<TileDefinition> {
        match self {
            Self::Idle => None,
            Self::Dragging { candidate } => Some(candidate),
        }
    }
}

/// Whether the hovered cell would accept the dragged tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverStatus {
    /// Inside the grid, free, and every neighbor matches
    Valid,
    /// Inside the grid but occupied or mismatched
    Invalid,
    /// Outside the current grid; no preview is shown
    OutsideGrid,
}

/// Advisory preview of where the dragged tile would land
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoverPreview {
    /// The dragged tile
    pub candidate: TileDefinition,
    /// Cell beneath the pointer
    pub cell: GridCell,
    /// Result of validating the candidate at `cell`
    pub status: HoverStatus,
}

impl HoverPreview {
    /// Whether releasing now would place the tile
    pub fn is_valid(&self) -> bool {
        self.status == HoverStatus::Valid
    }

    /// Whether a preview should be drawn at all
    pub fn is_visible(&self) -> bool {
        self.status != HoverStatus::OutsideGrid
    }
}
