//! Square grid of cells.
//!
//! `Board` is a pure data container: it knows its dimension and the contents
//! of each cell, nothing about turns, captures, or the center rule.
//!
//! Raw row indexing (`board[row]`) panics outside `[0, dim)`. Callers that
//! deal with untrusted coordinates go through [`Board::get`] or
//! [`Board::contains`] first.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::cell::{Cell, Color};
use super::error::BoardError;
use super::position::{Direction, Position};

/// A `dim × dim` grid of [`Cell`]s.
///
/// Deserialization goes through [`RawBoard`] and rejects grids that are
/// empty or not square.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dim: usize,
    cells: Vec<Vec<Cell>>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
pub struct RawBoard {
    dim: usize,
    cells: Vec<Vec<Cell>>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if raw.dim == 0 {
            return Err(BoardError::ZeroDimension);
        }
        if raw.cells.len() != raw.dim {
            return Err(BoardError::RowCount {
                expected: raw.dim,
                found: raw.cells.len(),
            });
        }
        if let Some((row, cells)) = raw
            .cells
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != raw.dim)
        {
            return Err(BoardError::RowLength {
                row,
                expected: raw.dim,
                found: cells.len(),
            });
        }

        Ok(Self {
            dim: raw.dim,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if `dim` is zero.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        assert!(dim > 0, "Board dimension must be positive");

        Self {
            dim,
            cells: vec![vec![Cell::Empty; dim]; dim],
        }
    }

    /// Side length of the board.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.dim && pos.col < self.dim
    }

    /// Cell at `pos`, or `None` when off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Cell> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    /// Overwrite the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self[pos.row][pos.col] = cell;
    }

    /// Swap the contents of two cells.
    pub fn swap(&mut self, a: Position, b: Position) {
        let tmp = self[a.row][a.col];
        self[a.row][a.col] = self[b.row][b.col];
        self[b.row][b.col] = tmp;
    }

    /// The middle cell `(dim / 2, dim / 2)`.
    #[must_use]
    pub fn center(&self) -> Position {
        Position::new(self.dim / 2, self.dim / 2)
    }

    /// Position `distance` steps away in `dir`, if it lies on the board.
    #[must_use]
    pub fn neighbor(&self, pos: Position, dir: Direction, distance: usize) -> Option<Position> {
        pos.step(dir, distance).filter(|p| self.contains(*p))
    }

    /// Number of cells equal to `cell`.
    #[must_use]
    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Number of pieces of `color` on the board.
    #[must_use]
    pub fn count_color(&self, color: Color) -> usize {
        self.count(Cell::from(color))
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let dim = self.dim;
        (0..dim).flat_map(move |row| (0..dim).map(move |col| Position::new(row, col)))
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.iter().map(Vec::as_slice)
    }
}

impl Index<usize> for Board {
    type Output = [Cell];

    fn index(&self, row: usize) -> &Self::Output {
        assert!(row < self.dim, "Row {} out of range for dimension {}", row, self.dim);
        &self.cells[row]
    }
}

impl IndexMut<usize> for Board {
    fn index_mut(&mut self, row: usize) -> &mut Self::Output {
        assert!(row < self.dim, "Row {} out of range for dimension {}", row, self.dim);
        &mut self.cells[row]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Yellow => 'Y',
                    Cell::Red => 'R',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        for dim in 1..=9 {
            let board = Board::new(dim);
            assert_eq!(board.dimension(), dim);
            assert_eq!(board.count(Cell::Empty), dim * dim);
            for pos in board.positions() {
                assert_eq!(board[pos.row][pos.col], Cell::Empty);
            }
        }
    }

    #[test]
    fn test_write_and_read_back_pattern() {
        let mut board = Board::new(5);

        for row in 0..5 {
            for col in 0..5 {
                board[row][col] = match (row + col) % 3 {
                    0 => Cell::Empty,
                    1 => Cell::Yellow,
                    _ => Cell::Red,
                };
            }
        }

        for row in 0..5 {
            for col in 0..5 {
                let expected = match (row + col) % 3 {
                    0 => Cell::Empty,
                    1 => Cell::Yellow,
                    _ => Cell::Red,
                };
                assert_eq!(board[row][col], expected);
                assert_eq!(board.get(Position::new(row, col)), Some(expected));
            }
        }
    }

    #[test]
    fn test_get_off_board() {
        let board = Board::new(3);
        assert_eq!(board.get(Position::new(3, 0)), None);
        assert_eq!(board.get(Position::new(0, 3)), None);
        assert!(!board.contains(Position::new(3, 3)));
        assert!(board.contains(Position::new(2, 2)));
    }

    #[test]
    fn test_center() {
        assert_eq!(Board::new(5).center(), Position::new(2, 2));
        assert_eq!(Board::new(7).center(), Position::new(3, 3));
        assert_eq!(Board::new(4).center(), Position::new(2, 2));
    }

    #[test]
    fn test_neighbor_respects_bounds() {
        let board = Board::new(3);
        let edge = Position::new(2, 1);
        assert_eq!(board.neighbor(edge, Direction::South, 1), None);
        assert_eq!(board.neighbor(edge, Direction::North, 2), Some(Position::new(0, 1)));
        assert_eq!(board.neighbor(edge, Direction::East, 2), None);
    }

    #[test]
    fn test_swap_and_count() {
        let mut board = Board::new(3);
        board.set(Position::new(0, 0), Cell::Red);
        board.swap(Position::new(0, 0), Position::new(0, 1));

        assert_eq!(board[0][0], Cell::Empty);
        assert_eq!(board[0][1], Cell::Red);
        assert_eq!(board.count_color(Color::Red), 1);
        assert_eq!(board.count_color(Color::Yellow), 0);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2);
        board[0][1] = Cell::Yellow;
        board[1][0] = Cell::Red;
        assert_eq!(format!("{}", board), ".Y\nR.\n");
    }

    #[test]
    #[should_panic(expected = "Board dimension must be positive")]
    fn test_zero_dimension_panics() {
        let _ = Board::new(0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_index_out_of_range_panics() {
        let board = Board::new(3);
        let _ = &board[3];
    }

    #[test]
    fn test_board_serialization() {
        let mut board = Board::new(3);
        board[1][2] = Cell::Red;
        let json = serde_json::to_string(&board).unwrap();
        let deserialized: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, deserialized);
    }

    #[test]
    fn test_malformed_board_rejected() {
        let ragged = serde_json::from_str::<Board>(r#"{"dim":5,"cells":[["Yellow","Red"]]}"#);
        let err = ragged.unwrap_err().to_string();
        assert!(err.contains("expected 5 rows, found 1"), "{}", err);

        let short_row = r#"{"dim":2,"cells":[["Empty","Red"],["Yellow"]]}"#;
        let err = serde_json::from_str::<Board>(short_row).unwrap_err().to_string();
        assert!(err.contains("row 1 has 1 cells, expected 2"), "{}", err);

        let empty = serde_json::from_str::<Board>(r#"{"dim":0,"cells":[]}"#);
        assert!(empty.unwrap_err().to_string().contains("dimension must be positive"));
    }
}
