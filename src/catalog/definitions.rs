//! Tile definitions and the session tile catalog
//!
//! The catalog only grows. Each definition carries a unique edge tuple, so
//! two entries can never describe the same tile.

use tracing::debug;

use crate::catalog::edges::EdgeSet;
use crate::io::configuration::{CUSTOM_TILE_PREFIX, DEFAULT_TILES};
use crate::io::error::{EditorError, Result};

/// An immutable tile: an identifier plus its four edge labels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDefinition {
    id: String,
    edges: EdgeSet,
}

impl TileDefinition {
    /// Create a definition outside of any catalog
    pub fn new(id: impl Into<String>, edges: EdgeSet) -> Self {
        Self {
            id: id.into(),
            edges,
        }
    }

    /// Identifier shown in the palette and used by `pick`
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Edge labels of this tile
    pub const fn edges(&self) -> &EdgeSet {
        &self.edges
    }
}

/// Ordered collection of the tile definitions available in a session
#[derive(Debug, Clone, Default)]
pub struct TileCatalog {
    definitions: Vec<TileDefinition>,
}

impl TileCatalog {
    /// Create an empty catalog
    pub const fn new() -> Self {
        Self {
            definitions: Vec::new(),
        }
    }

    /// Create a catalog holding the four starter tiles `A` to `D`
    ///
    /// # Errors
    ///
    /// Returns an error if the starter table holds an invalid edge value or a
    /// duplicate edge tuple
    pub fn with_default_tiles() -> Result<Self> {
        let mut catalog = Self::new();
        for (id, values) in DEFAULT_TILES {
            let edges = EdgeSet::from_values(values)?;
            catalog.insert(id.to_string(), edges)?;
        }
        Ok(catalog)
    }

    /// Add a user-authored definition under a freshly generated identifier
    ///
    /// Comparison is per direction and order sensitive: a rotated copy of an
    /// existing tile is a different tile.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateDefinition` if another definition already has exactly
    /// these edges. The catalog is left unchanged.
    pub fn add_definition(&mut self, edges: EdgeSet) -> Result<TileDefinition> {
        let id = self.next_identifier();
        self.insert(id, edges)
    }

    /// Look up a definition by identifier
    pub fn get(&self, id: &str) -> Option<&TileDefinition> {
        self.definitions.iter().find(|definition| definition.id == id)
    }

    /// Definition carrying exactly these edges, if any
    pub fn find_by_edges(&self, edges: &EdgeSet) -> Option<&TileDefinition> {
        self.definitions
            .iter()
            .find(|definition| definition.edges == *edges)
    }

    /// All definitions in insertion order
    pub fn definitions(&self) -> &[TileDefinition] {
        &self.definitions
    }

    /// Number of definitions
    pub const fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the catalog holds no definitions
    pub const fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    fn insert(&mut self, id: String, edges: EdgeSet) -> Result<TileDefinition> {
        if let Some(existing) = self.find_by_edges(&edges) {
            return Err(EditorError::DuplicateDefinition {
                existing: existing.id.clone(),
                edges,
            });
        }

        debug!(tile = %id, %edges, "catalog definition added");
        let definition = TileDefinition { id, edges };
        self.definitions.push(definition.clone());
        Ok(definition)
    }

    // Custom tiles are numbered after the catalog length, skipping taken names
    fn next_identifier(&self) -> String {
        let mut number = self.definitions.len() + 1;
        loop {
            let candidate = format!("{CUSTOM_TILE_PREFIX}{number}");
            if self.get(&candidate).is_none() {
                return candidate;
            }
            number += 1;
        }
    }
}
