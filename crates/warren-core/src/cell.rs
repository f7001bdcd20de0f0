//! Maze cells: movement directions and per-side wall flags.
//!
//! A wall is declared on one side of one cell. Traversal across an edge is
//! allowed only when neither adjacent cell has a wall on the shared side,
//! so a wall declared on a single side still blocks both directions.

use std::ops::{BitAnd, BitOr};

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A cardinal movement direction on the grid.
///
/// Y grows down, so [`Direction::Up`] is a step towards smaller `y`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in up, right, down, left order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::Up => Point::new(0, -1),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
            Direction::Left => Point::new(-1, 0),
        }
    }

    /// The direction pointing the opposite way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Map a relative offset back to a direction.
    ///
    /// Only the four exact unit offsets qualify; anything else (zero,
    /// diagonal, or longer than one step) returns `None`.
    #[inline]
    pub fn from_delta(d: Point) -> Option<Self> {
        match (d.x, d.y) {
            (0, -1) => Some(Direction::Up),
            (1, 0) => Some(Direction::Right),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Walls
// ---------------------------------------------------------------------------

/// Bitmask of wall flags on a cell's four sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Walls(pub u8);

impl Walls {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const DOWN: Self = Self(1 << 2);
    pub const LEFT: Self = Self(1 << 3);
    pub const ALL: Self = Self(0b1111);

    /// Whether this mask contains all the bits from `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Whether the mask is empty.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add the bits from `other`.
    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clear the bits from `other`.
    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl From<Direction> for Walls {
    /// The wall flag on the side a step in `dir` leaves through.
    #[inline]
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => Walls::UP,
            Direction::Right => Walls::RIGHT,
            Direction::Down => Walls::DOWN,
            Direction::Left => Walls::LEFT,
        }
    }
}

impl BitOr for Walls {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Walls {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Cell
// ---------------------------------------------------------------------------

/// A single maze cell: its grid position plus the walls on its four sides.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    walls: Walls,
}

impl Cell {
    /// Create a wall-free cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            walls: Walls::NONE,
        }
    }

    /// The cell's own grid coordinate.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }

    /// The cell's wall mask.
    #[inline]
    pub const fn walls(&self) -> Walls {
        self.walls
    }

    /// Whether this cell has a wall on its `dir` side.
    #[inline]
    pub fn has_wall(&self, dir: Direction) -> bool {
        self.walls.contains(dir.into())
    }

    /// Declare a wall on the `dir` side of this cell.
    #[inline]
    pub fn add_wall(&mut self, dir: Direction) {
        self.walls.insert(dir.into());
    }

    /// Clear the wall on the `dir` side of this cell.
    #[inline]
    pub fn remove_wall(&mut self, dir: Direction) {
        self.walls.remove(dir.into());
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn cell_round_trip() {
        let mut c = Cell::new(Point::new(4, 1));
        c.add_wall(Direction::Down);
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
