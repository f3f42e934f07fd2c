//! Interactive editor tying catalog, engine and pointer handling together
//!
//! The editor is a two-state machine (idle or dragging). Every pointer
//! event is evaluated from scratch against the current board; no match state
//! is carried between events.

use tracing::{debug, trace, warn};

use crate::catalog::definitions::{TileCatalog, TileDefinition};
use crate::catalog::edges::EdgeSet;
use crate::engine::placement::{PlacedTile, PlacementEngine};
use crate::interaction::state::{HoverPreview, HoverStatus, InteractionState, PointerPosition};
use crate::interaction::subscription::{PointerEvent, PointerSubscription};
use crate::io::error::{EditorError, Result};
use crate::spatial::grid::{GridCell, GridConfig};
use crate::spatial::mapper::CoordinateMapper;

/// A user intent delivered by the host
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Author a new catalog tile
    AddCatalogTile(EdgeSet),
    /// Start dragging the catalog tile with this identifier
    Pick(String),
    /// Raw pointer activity in canvas-local coordinates
    Pointer(PointerEvent),
    /// Click on a grid cell, removing the tile there
    ClickCell(GridCell),
    /// Change the grid dimensions
    Resize {
        /// New column count
        cols: usize,
        /// New row count
        rows: usize,
    },
    /// Remove every placed tile
    ClearAll,
}

/// What releasing the pointer did
#[derive(Debug)]
pub enum ReleaseOutcome {
    /// Nothing was being dragged
    NoCandidate,
    /// The candidate was committed
    Placed(PlacedTile),
    /// The candidate was dropped without changing the board
    Discarded {
        /// The tile that was being dragged
        candidate: TileDefinition,
        /// Why the placement was refused
        reason: EditorError,
    },
}

/// Result of applying one intent
#[derive(Debug)]
pub enum IntentOutcome {
    /// A catalog tile was added
    TileAdded(TileDefinition),
    /// A drag started
    Picked(TileDefinition),
    /// The pointer moved; carries the preview while dragging
    Hovered(Option<HoverPreview>),
    /// The pointer was released
    Released(ReleaseOutcome),
    /// A click was handled; carries the removed tile if there was one
    Clicked(Option<PlacedTile>),
    /// The grid was resized
    Resized(GridConfig),
    /// The board was cleared; carries the number of removed tiles
    Cleared(usize),
}

/// Editing session over one board
#[derive(Debug, Clone)]
pub struct Editor {
    catalog: TileCatalog,
    engine: PlacementEngine,
    grid: GridConfig,
    mapper: CoordinateMapper,
    state: InteractionState,
    pointer: PointerPosition,
}

impl Editor {
    /// Create an editor with an empty board
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `cell_size` is not positive or exceeds
    /// the permitted maximum
    pub fn new(catalog: TileCatalog, grid: GridConfig, cell_size: f64) -> Result<Self> {
        let mapper = CoordinateMapper::new(grid, cell_size)?;
        Ok(Self {
            catalog,
            engine: PlacementEngine::new(),
            grid,
            mapper,
            state: InteractionState::Idle,
            pointer: PointerPosition::default(),
        })
    }

    /// Tile definitions available for dragging
    pub const fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// The board
    pub const fn engine(&self) -> &PlacementEngine {
        &self.engine
    }

    /// Current grid dimensions
    pub const fn grid(&self) -> GridConfig {
        self.grid
    }

    /// Canvas geometry for the current grid dimensions
    pub const fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Current drag state
    pub const fn state(&self) -> &InteractionState {
        &self.state
    }

    /// Last known pointer position
    pub const fn pointer(&self) -> PointerPosition {
        self.pointer
    }

    /// Tile being dragged, if any
    pub const fn candidate(&self) -> Option<&TileDefinition> {
        self.state.candidate()
    }

    /// Preview of the dragged tile at the last known pointer position
    ///
    /// Recomputed on every call; `None` while idle.
    pub fn hover(&self) -> Option<HoverPreview> {
        let candidate = self.state.candidate()?;
        let cell = self.mapper.cell_at(self.pointer.x, self.pointer.y);

        let status = if !self.grid.contains(cell) {
            HoverStatus::OutsideGrid
        } else if self.engine.can_place(cell, candidate, &self.grid) {
            HoverStatus::Valid
        } else {
            HoverStatus::Invalid
        };

        Some(HoverPreview {
            candidate: candidate.clone(),
            cell,
            status,
        })
    }

    /// Author a new catalog tile
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` if the edges are already defined
    pub fn add_catalog_tile(&mut self, edges: EdgeSet) -> Result<TileDefinition> {
        self.catalog.add_definition(edges).inspect_err(|error| {
            warn!(%error, "catalog tile not added");
        })
    }

    /// Start dragging a catalog tile, replacing any current candidate
    ///
    /// # Errors
    ///
    /// Returns `UnknownTile` if the catalog has no such identifier; the drag
    /// state is unchanged
    pub fn pick(&mut self, id: &str) -> Result<TileDefinition> {
        let tile = self
            .catalog
            .get(id)
            .cloned()
            .ok_or_else(|| EditorError::UnknownTile { id: id.to_string() })?;

        if let Some(previous) = self.state.begin_drag(tile.clone()) {
            debug!(previous = previous.id(), "drag candidate replaced");
        }
        debug!(tile = tile.id(), "drag started");
        Ok(tile)
    }

    /// Record a pointer move; returns the hover preview while dragging
    pub fn move_to(&mut self, x: f64, y: f64) -> Option<HoverPreview> {
        self.pointer = PointerPosition::new(x, y);
        let preview = self.hover();
        if let Some(preview) = &preview {
            trace!(cell = %preview.cell, status = ?preview.status, "hover updated");
        }
        preview
    }

    /// Release the pointer at its last known position
    ///
    /// Places the candidate if the cell is inside the grid, free, and
    /// matches every neighbor; otherwise drops it. Either way the editor
    /// returns to idle.
    pub fn release(&mut self) -> ReleaseOutcome {
        let Some(candidate) = self.state.end_drag() else {
            return ReleaseOutcome::NoCandidate;
        };

        let cell = self.mapper.cell_at(self.pointer.x, self.pointer.y);
        match self.engine.place(cell, &candidate, &self.grid) {
            Ok(placed) => ReleaseOutcome::Placed(placed),
            Err(error) => {
                debug!(%cell, tile = candidate.id(), %error, "drag discarded");
                ReleaseOutcome::Discarded {
                    candidate,
                    reason: error,
                }
            }
        }
    }

    /// Abandon the current drag without touching the board
    pub fn cancel_drag(&mut self) -> Option<TileDefinition> {
        let candidate = self.state.end_drag();
        if let Some(tile) = &candidate {
            debug!(tile = tile.id(), "drag cancelled");
        }
        candidate
    }

    /// Click a grid cell: removes the tile there
    ///
    /// Empty cells, cells outside the current grid, and clicks during a drag
    /// are no-ops.
    pub fn click_cell(&mut self, cell: GridCell) -> Option<PlacedTile> {
        if self.state.is_dragging() || !self.grid.contains(cell) {
            return None;
        }
        self.engine.remove_at(cell).ok()
    }

    /// Click at a canvas-local pointer position
    pub fn click_at(&mut self, x: f64, y: f64) -> Option<PlacedTile> {
        self.pointer = PointerPosition::new(x, y);
        let cell = self.mapper.cell_at(x, y);
        self.click_cell(cell)
    }

    /// Change the grid dimensions and recompute canvas offsets
    ///
    /// Existing placements are kept even if they now fall outside the grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a dimension is out of range; the grid is
    /// unchanged
    pub fn resize(&mut self, cols: usize, rows: usize) -> Result<GridConfig> {
        let grid = GridConfig::new(cols, rows)?;
        self.mapper = CoordinateMapper::new(grid, self.mapper.cell_size())?;
        self.grid = grid;

        let unreachable = self
            .engine
            .placements()
            .filter(|placed| !grid.contains(placed.cell()))
            .count();
        if unreachable > 0 {
            debug!(unreachable, "placements left outside the resized grid");
        }
        Ok(grid)
    }

    /// Remove every placed tile; returns how many were removed
    pub fn clear_all(&mut self) -> usize {
        self.engine.clear()
    }

    /// Handle one raw pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent) -> IntentOutcome {
        match event {
            PointerEvent::Moved { x, y } => IntentOutcome::Hovered(self.move_to(x, y)),
            PointerEvent::Released => IntentOutcome::Released(self.release()),
            PointerEvent::Clicked { x, y } => IntentOutcome::Clicked(self.click_at(x, y)),
        }
    }

    /// Apply any user intent
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition`, `UnknownTile` or `InvalidParameter`
    /// from the underlying operation. Placement rejections are not errors
    /// here; they surface as [`ReleaseOutcome::Discarded`].
    pub fn apply(&mut self, intent: Intent) -> Result<IntentOutcome> {
        match intent {
            Intent::AddCatalogTile(edges) => {
                self.add_catalog_tile(edges).map(IntentOutcome::TileAdded)
            }
            Intent::Pick(id) => self.pick(&id).map(IntentOutcome::Picked),
            Intent::Pointer(event) => Ok(self.handle_pointer(event)),
            Intent::ClickCell(cell) => Ok(IntentOutcome::Clicked(self.click_cell(cell))),
            Intent::Resize { cols, rows } => self.resize(cols, rows).map(IntentOutcome::Resized),
            Intent::ClearAll => Ok(IntentOutcome::Cleared(self.clear_all())),
        }
    }

    /// Open a pointer subscription for this editing session
    ///
    /// The subscription holds the editor exclusively; dropping it cancels any
    /// drag still in progress.
    pub fn subscribe(&mut self) -> PointerSubscription<'_> {
        PointerSubscription::new(self)
    }
}
