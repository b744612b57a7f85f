//! Grid cells, unit directions, and the canonical cell set.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::cmp::Ordering;
use std::fmt;

/// An insertion-ordered set of cells.
///
/// Geometry outputs are always built in canonical (row-major) order, so
/// iterating a `CellSet` produced by this workspace is deterministic and
/// never depends on hash iteration order.
pub type CellSet = IndexSet<Cell>;

/// An integer `(x, z)` grid coordinate.
///
/// `x` grows east, `z` grows north. Ordering is row-major: cells compare
/// by `z` first, then by `x`, matching the scan order used for render
/// batches and canonical set construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Column (east-west axis).
    pub x: i32,
    /// Row (north-south axis).
    pub z: i32,
}

impl Cell {
    /// Construct a cell from its coordinates.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The adjacent cell in `dir`, or `None` if the step overflows `i32`.
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dx, dz) = dir.offset();
        Some(Cell {
            x: self.x.checked_add(dx)?,
            z: self.z.checked_add(dz)?,
        })
    }

    /// The 8 Moore neighbours (cardinals first, then diagonals).
    pub fn moore_neighbours(self) -> SmallVec<[Cell; 8]> {
        Direction::MOORE
            .iter()
            .filter_map(|&d| self.step(d))
            .collect()
    }

    /// The 4 von Neumann neighbours in [`Direction::CARDINAL`] order.
    pub fn cardinal_neighbours(self) -> SmallVec<[Cell; 4]> {
        Direction::CARDINAL
            .iter()
            .filter_map(|&d| self.step(d))
            .collect()
    }
}

impl Ord for Cell {
    fn cmp(&self, other: &Self) -> Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl PartialOrd for Cell {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

/// One of the eight unit offsets on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// `+z`.
    North,
    /// `-z`.
    South,
    /// `+x`.
    East,
    /// `-x`.
    West,
    /// `+x, +z`.
    NorthEast,
    /// `-x, +z`.
    NorthWest,
    /// `+x, -z`.
    SouthEast,
    /// `-x, -z`.
    SouthWest,
}

impl Direction {
    /// The four cardinal directions: N, S, E, W.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// All eight directions: cardinals, then NE, NW, SE, SW.
    pub const MOORE: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// `(dx, dz)` unit offset.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::North => (0, 1),
            Self::South => (0, -1),
            Self::East => (1, 0),
            Self::West => (-1, 0),
            Self::NorthEast => (1, 1),
            Self::NorthWest => (-1, 1),
            Self::SouthEast => (1, -1),
            Self::SouthWest => (-1, -1),
        }
    }

    /// Whether this is one of N, S, E, W.
    pub const fn is_cardinal(self) -> bool {
        matches!(self, Self::North | Self::South | Self::East | Self::West)
    }

    /// The direction pointing the other way.
    pub const fn opposite(self) -> Direction {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::NorthEast => Self::SouthWest,
            Self::NorthWest => Self::SouthEast,
            Self::SouthEast => Self::NorthWest,
            Self::SouthWest => Self::NorthEast,
        }
    }
}
