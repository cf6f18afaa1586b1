//! Error types.
//!
//! Rule violations are ordinary outcomes of player input and are returned,
//! never logged. Contract violations (zero dimension, raw out-of-range row
//! access) panic instead and have no variant here.

use thiserror::Error;

use super::cell::Color;
use super::position::Position;

/// Why an action was refused. The game state is unchanged whenever one of
/// these is returned.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("pieces can only be placed during the placement stage")]
    NotPlacingStage,

    #[error("pieces can only be moved during the playing stage")]
    NotPlayingStage,

    #[error("the game is over")]
    GameOver,

    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("the center cell {0} cannot hold a piece")]
    CenterCell(Position),

    #[error("cell {0} is occupied")]
    Occupied(Position),

    #[error("a move must be exactly one orthogonal step, got {from} -> {to}")]
    NotOrthogonalStep { from: Position, to: Position },

    #[error("cell {pos} does not hold a {color} piece")]
    NotOwnPiece { pos: Position, color: Color },

    #[error("no computer-controlled side in this game")]
    AiDisabled,

    #[error("it is not the computer's turn")]
    NotAiTurn,

    #[error("{0} has no legal action")]
    NoLegalAction(Color),
}

/// Serialized board that does not describe a `dim × dim` grid.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board dimension must be positive")]
    ZeroDimension,

    #[error("expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    RowLength { row: usize, expected: usize, found: usize },
}

/// Invalid [`GameConfig`](crate::game::GameConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimension {dimension} is below the minimum of {min}")]
    DimensionTooSmall { dimension: usize, min: usize },
}
