//! Board coordinates, orthogonal directions, and one-step moves.

use serde::{Deserialize, Serialize};

/// A board coordinate. Rows grow downward, columns grow rightward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position.
    #[must_use]
    pub fn manhattan(self, other: Position) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Offset this position by `distance` steps in `dir`.
    ///
    /// Returns `None` when the result would have a negative coordinate.
    /// The upper bound is the board's concern, not the position's.
    #[must_use]
    pub fn step(self, dir: Direction, distance: usize) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = offset_coord(self.row, dr, distance)?;
        let col = offset_coord(self.col, dc, distance)?;
        Some(Position::new(row, col))
    }
}

fn offset_coord(coord: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(coord),
        d if d > 0 => coord.checked_add(distance),
        _ => coord.checked_sub(distance),
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Row/column delta for one step.
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
        }
    }
}

/// A piece relocation from one cell to another.
///
/// Legality (one orthogonal step onto an empty cell) is checked by the game,
/// not at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub to: Position,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(from: Position, to: Position) -> Self {
        Self { from, to }
    }

    /// The move as a `(from_row, from_col, to_row, to_col)` tuple.
    #[must_use]
    pub const fn as_tuple(self) -> (usize, usize, usize, usize) {
        (self.from.row, self.from.col, self.to.row, self.to.col)
    }

    /// Check if the move is exactly one orthogonal step.
    #[must_use]
    pub fn is_single_step(self) -> bool {
        self.from.manhattan(self.to) == 1
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
