//! Custodian capture detection.
//!
//! A piece landing on a cell flanks an enemy when, in some orthogonal
//! direction, the adjacent cell holds the enemy and the cell beyond holds
//! the lander's own color. The center cell is immune: an enemy standing on
//! it is never captured.
//!
//! These functions only *detect* captures. Removing pieces and updating
//! counts is the game's job.

use crate::core::{Board, Captures, Direction, Move, Position};

/// Check if `pos` is the board's center cell.
#[must_use]
pub fn is_center(board: &Board, pos: Position) -> bool {
    pos == board.center()
}

/// Enemy positions flanked by the piece currently standing on `pos`,
/// in `Direction::ALL` order.
///
/// Returns nothing if `pos` is empty or off the board.
#[must_use]
pub fn captures_at(board: &Board, pos: Position) -> Captures {
    let mut captured = Captures::new();

    let Some(color) = board.get(pos).and_then(|cell| cell.color()) else {
        return captured;
    };
    let enemy = color.opponent();

    for dir in Direction::ALL {
        let (Some(near), Some(far)) = (board.neighbor(pos, dir, 1), board.neighbor(pos, dir, 2))
        else {
            continue;
        };

        if is_center(board, near) {
            continue;
        }

        if board[near.row][near.col].holds(enemy) && board[far.row][far.col].holds(color) {
            captured.push(near);
        }
    }

    captured
}

/// Enemy positions that `mv` would capture if played on `board`.
///
/// The board is not modified. `mv` is assumed legal for the piece on
/// `mv.from`.
#[must_use]
pub fn move_captures(board: &Board, mv: Move) -> Captures {
    let mut after = board.clone();
    after.swap(mv.from, mv.to);
    captures_at(&after, mv.to)
}
