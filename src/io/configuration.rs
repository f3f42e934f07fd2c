//! Editor constants and runtime configuration defaults

// Grid geometry
/// Side length of one grid cell in canvas units
pub const CELL_SIZE: f64 = 50.0;
/// Largest permitted cell side, bounding the rendered canvas
pub const MAX_CELL_SIZE: f64 = 200.0;

/// Smallest permitted column or row count
pub const MIN_GRID_DIMENSION: usize = 2;
/// Largest permitted column or row count
pub const MAX_GRID_DIMENSION: usize = 20;

/// Column count of a fresh editor
pub const DEFAULT_GRID_COLS: usize = 10;
/// Row count of a fresh editor
pub const DEFAULT_GRID_ROWS: usize = 10;

// Edge alphabet
/// Number of distinct edge classes a tile edge may carry
pub const EDGE_CLASS_COUNT: usize = 4;

/// Tiles every editor session starts with, edges in north, east, south, west order
pub const DEFAULT_TILES: [(&str, [u8; 4]); 4] = [
    ("A", [0, 1, 2, 1]),
    ("B", [1, 2, 1, 0]),
    ("C", [2, 2, 0, 3]),
    ("D", [3, 0, 3, 2]),
];

/// Prefix for identifiers of user-authored tiles
pub const CUSTOM_TILE_PREFIX: &str = "U";

// Rendering
/// RGBA color of each edge class (red, blue, yellow, green)
pub const EDGE_CLASS_COLORS: [[u8; 4]; EDGE_CLASS_COUNT] = [
    [255, 0, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
    [0, 128, 0, 255],
];

/// Thickness of the colored edge stripe drawn along each tile side
pub const STRIPE_WIDTH: f64 = 5.0;
/// Grid line color
pub const GRID_LINE_COLOR: [u8; 4] = [221, 221, 221, 255];
/// Fill color of a placed tile
pub const TILE_FILL_COLOR: [u8; 4] = [255, 255, 255, 255];
/// Outline color of a placed tile
pub const TILE_OUTLINE_COLOR: [u8; 4] = [51, 51, 51, 255];
/// Outline color of the drag preview
pub const PREVIEW_OUTLINE_COLOR: [u8; 4] = [85, 85, 85, 255];
/// Opacity applied to everything drawn for the drag preview
pub const PREVIEW_ALPHA: f64 = 0.4;

// Output settings
/// Suffix added to rendered board filenames
pub const OUTPUT_SUFFIX: &str = "_board";
