//! Edge labels and compass directions for edge matching
//!
//! A tile presents one [`EdgeClass`] on each of its four sides. Two tiles may
//! sit side by side only when the labels on their touching sides are equal.

use std::fmt;

use crate::io::configuration::EDGE_CLASS_COUNT;
use crate::io::error::{Result, invalid_parameter};

/// Opaque label carried by one side of a tile
///
/// Labels are drawn from a fixed alphabet of [`EDGE_CLASS_COUNT`] classes.
/// Renderers map them to colors; the engine only compares them for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeClass(u8);

impl EdgeClass {
    /// Create an edge class, rejecting values outside the alphabet
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if `value` is not below [`EDGE_CLASS_COUNT`]
    pub fn new(value: u8) -> Result<Self> {
        if usize::from(value) < EDGE_CLASS_COUNT {
            Ok(Self(value))
        } else {
            Err(invalid_parameter(
                "edge_class",
                &value,
                &format!("must be below {EDGE_CLASS_COUNT}"),
            ))
        }
    }

    /// Raw label value
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Position of this class in color tables
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for EdgeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compass side of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up, toward row 0
    North,
    /// Right, toward higher columns
    East,
    /// Down, toward higher rows
    South,
    /// Left, toward column 0
    West,
}

impl Direction {
    /// All directions in north, east, south, west order
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The side that faces this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::East => Self::West,
            Self::South => Self::North,
            Self::West => Self::East,
        }
    }

    /// Cell offset `(dx, dy)` of the neighbor on this side (y grows downward)
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, -1),
            Self::East => (1, 0),
            Self::South => (0, 1),
            Self::West => (-1, 0),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
        };
        f.write_str(name)
    }
}

/// The four edge labels of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSet {
    /// Label on the top side
    pub north: EdgeClass,
    /// Label on the right side
    pub east: EdgeClass,
    /// Label on the bottom side
    pub south: EdgeClass,
    /// Label on the left side
    pub west: EdgeClass,
}

impl EdgeSet {
    /// Build an edge set from already validated labels
    pub const fn new(north: EdgeClass, east: EdgeClass, south: EdgeClass, west: EdgeClass) -> Self {
        Self {
            north,
            east,
            south,
            west,
        }
    }

    /// Build an edge set from raw values in north, east, south, west order
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if any value lies outside the edge alphabet
    pub fn from_values(values: [u8; 4]) -> Result<Self> {
        let [north, east, south, west] = values;
        Ok(Self::new(
            EdgeClass::new(north)?,
            EdgeClass::new(east)?,
            EdgeClass::new(south)?,
            EdgeClass::new(west)?,
        ))
    }

    /// Label on the given side
    pub const fn get(&self, direction: Direction) -> EdgeClass {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Labels in north, east, south, west order
    pub const fn to_array(&self) -> [EdgeClass; 4] {
        [self.north, self.east, self.south, self.west]
    }

    /// Whether these edges agree with a `neighbor` lying on the `direction` side
    ///
    /// The neighbor's opposite side must carry the same label as this side.
    pub const fn matches(&self, direction: Direction, neighbor: &Self) -> bool {
        neighbor.get(direction.opposite()).0 == self.get(direction).0
    }
}

impl fmt::Display for EdgeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{n:{},e:{},s:{},w:{}}}",
            self.north, self.east, self.south, self.west
        )
    }
}
