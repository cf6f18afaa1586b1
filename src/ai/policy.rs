//! Move selection policies for the computer-controlled side.
//!
//! Policies are trait-based so a driver can pit one against another:
//! - `HeuristicPolicy`: spread-out placement, greedy-capture movement
//! - `RandomPolicy`: uniform choice among legal actions (baseline)
//!
//! A policy only *chooses*; the game validates and applies the choice.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Board, Color, GameRng, Move, Position};
use crate::rules;

/// Policy for choosing the computer's next action.
pub trait AiPolicy: Send + Sync {
    /// Pick an empty, non-center cell to place a piece of `color` on.
    ///
    /// Returns `None` when no such cell exists.
    fn choose_placement(&self, board: &Board, color: Color, rng: &mut GameRng) -> Option<Position>;

    /// Pick a legal one-step move for `color`.
    ///
    /// Returns `None` when `color` has no legal move.
    fn choose_move(&self, board: &Board, color: Color, rng: &mut GameRng) -> Option<Move>;
}

/// Which built-in policy drives the computer side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AiStrategy {
    #[default]
    Heuristic,
    Random,
}

impl AiStrategy {
    /// The policy implementing this strategy.
    #[must_use]
    pub fn policy(self) -> &'static dyn AiPolicy {
        match self {
            AiStrategy::Heuristic => &HeuristicPolicy,
            AiStrategy::Random => &RandomPolicy,
        }
    }
}

// =============================================================================
// Heuristic Policy
// =============================================================================

/// Distance-weighted placement, greedy-then-random movement.
///
/// Placement favours cells far from the centroid of the side's own pieces,
/// sampling each candidate with weight equal to its squared distance.
/// Movement takes the first move (in enumeration order) that captures,
/// otherwise a uniformly random legal move. No lookahead past one ply.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// Mean position of `color`'s pieces, or the board's geometric center
    /// when it has none.
    #[must_use]
    pub fn centroid(board: &Board, color: Color) -> (f64, f64) {
        let (mut sum_row, mut sum_col, mut n) = (0.0, 0.0, 0usize);

        for pos in board.positions() {
            if board[pos.row][pos.col].holds(color) {
                sum_row += pos.row as f64;
                sum_col += pos.col as f64;
                n += 1;
            }
        }

        if n == 0 {
            let mid = (board.dimension() as f64 - 1.0) / 2.0;
            (mid, mid)
        } else {
            (sum_row / n as f64, sum_col / n as f64)
        }
    }

    /// Squared Euclidean distance of each candidate from `centroid`.
    #[must_use]
    pub fn placement_weights(candidates: &[Position], centroid: (f64, f64)) -> Vec<f64> {
        candidates
            .iter()
            .map(|pos| {
                let dr = pos.row as f64 - centroid.0;
                let dc = pos.col as f64 - centroid.1;
                dr * dr + dc * dc
            })
            .collect()
    }
}

impl AiPolicy for HeuristicPolicy {
    fn choose_placement(&self, board: &Board, color: Color, rng: &mut GameRng) -> Option<Position> {
        let candidates = rules::placement_candidates(board);
        let centroid = Self::centroid(board, color);
        let weights = Self::placement_weights(&candidates, centroid);

        let index = rng.choose_weighted(&weights)?;
        let chosen = candidates[index];

        debug!(%color, position = %chosen, candidates = candidates.len(), "AI chose placement");
        Some(chosen)
    }

    fn choose_move(&self, board: &Board, color: Color, rng: &mut GameRng) -> Option<Move> {
        let moves = rules::legal_moves(board, color);

        if let Some(&capturing) = moves
            .iter()
            .find(|&&mv| !rules::move_captures(board, mv).is_empty())
        {
            debug!(%color, mv = %capturing, "AI chose capturing move");
            return Some(capturing);
        }

        let chosen = *rng.choose(&moves)?;
        debug!(%color, mv = %chosen, legal = moves.len(), "AI chose random move");
        Some(chosen)
    }
}

// =============================================================================
// Random Policy
// =============================================================================

/// Uniform random placement and movement.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomPolicy;

impl AiPolicy for RandomPolicy {
    fn choose_placement(
        &self,
        board: &Board,
        _color: Color,
        rng: &mut GameRng,
    ) -> Option<Position> {
        let candidates = rules::placement_candidates(board);
        rng.choose(&candidates).copied()
    }

    fn choose_move(&self, board: &Board, color: Color, rng: &mut GameRng) -> Option<Move> {
        let moves = rules::legal_moves(board, color);
        rng.choose(&moves).copied()
    }
}
