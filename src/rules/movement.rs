//! Legal action enumeration.

use crate::core::{Board, Cell, Color, Direction, Move, Position};

use super::capture::is_center;

/// Check if `color` has at least one legal move: some empty cell
/// orthogonally adjacent to one of its pieces.
#[must_use]
pub fn has_possible_move(board: &Board, color: Color) -> bool {
    board.positions().any(|pos| {
        board[pos.row][pos.col].is_empty()
            && Direction::ALL.iter().any(|&dir| {
                board
                    .neighbor(pos, dir, 1)
                    .is_some_and(|n| board[n.row][n.col].holds(color))
            })
    })
}

/// Every legal one-step move for `color`.
///
/// Sources are scanned in row-major order, and for each source the
/// directions in `Direction::ALL` order.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for from in board.positions() {
        if !board[from.row][from.col].holds(color) {
            continue;
        }
        for dir in Direction::ALL {
            if let Some(to) = board.neighbor(from, dir, 1) {
                if board[to.row][to.col] == Cell::Empty {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }

    moves
}

/// Empty cells a piece may be placed on, in row-major order.
#[must_use]
pub fn placement_candidates(board: &Board) -> Vec<Position> {
    board
        .positions()
        .filter(|&pos| board[pos.row][pos.col].is_empty() && !is_center(board, pos))
        .collect()
}
