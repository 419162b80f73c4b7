//! Board coordinates and the eight step directions.
//!
//! Coordinates use signed components so that an agent may hand back an
//! off-board cell and the rules can reject it instead of panicking.

use serde::{Deserialize, Serialize};

/// Width and height of the square board.
pub const BOARD_SIZE: i8 = 5;

/// A cell on the board, `x` is the column and `y` the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i8,
    pub y: i8,
}

impl Coord {
    /// The centre cell.
    pub const CENTER: Coord = Coord::new(2, 2);

    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Check whether the coordinate lies on the board.
    #[inline]
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Step one cell in `dir`, or `None` if that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, dir: Direction) -> Option<Coord> {
        let next = Coord::new(self.x.checked_add(dir.dx)?, self.y.checked_add(dir.dy)?);
        next.in_bounds().then_some(next)
    }

    /// Cells on the outer ring of the board.
    #[must_use]
    pub const fn is_edge(self) -> bool {
        self.x == 0 || self.y == 0 || self.x == BOARD_SIZE - 1 || self.y == BOARD_SIZE - 1
    }

    #[must_use]
    pub fn manhattan(self, other: Coord) -> u8 {
        (self.x - other.x).unsigned_abs() + (self.y - other.y).unsigned_abs()
    }

    /// King-move adjacency. A cell is not adjacent to itself.
    #[must_use]
    pub fn is_adjacent(self, other: Coord) -> bool {
        self != other && (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }

    /// All on-board neighbours in `DIRECTIONS` order.
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        DIRECTIONS.iter().filter_map(move |&dir| self.offset(dir))
    }

    /// Every cell, row by row.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|y| (0..BOARD_SIZE).map(move |x| Coord::new(x, y)))
    }

    /// Array indices `(row, column)`. Only valid for in-bounds coordinates.
    #[inline]
    pub(crate) fn index(self) -> (usize, usize) {
        debug_assert!(self.in_bounds(), "{self} is off the board");
        (self.y as usize, self.x as usize)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the eight unit king-move offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    #[must_use]
    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn reverse(self) -> Self {
        Self::new(-self.dx, -self.dy)
    }

    /// Direction leading from `from` to the adjacent cell `to`.
    #[must_use]
    pub fn between(from: Coord, to: Coord) -> Option<Direction> {
        from.is_adjacent(to)
            .then(|| Direction::new(to.x - from.x, to.y - from.y))
    }

    /// Check that this is one of the eight king offsets.
    #[must_use]
    pub fn is_unit(self) -> bool {
        DIRECTIONS.contains(&self)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.dx, self.dy)
    }
}

/// Enumeration order for every move and build scan.
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(1, 1),
    Direction::new(1, 0),
    Direction::new(1, -1),
    Direction::new(0, 1),
    Direction::new(0, -1),
    Direction::new(-1, 1),
    Direction::new(-1, 0),
    Direction::new(-1, -1),
];
