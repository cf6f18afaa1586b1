//! Core engine types: cells, positions, the board, RNG, actions, and errors.
//!
//! Nothing here knows the rules of Seega. The board stores cells and the RNG
//! produces numbers; `rules` and `game` give them meaning.

pub mod action;
pub mod board;
pub mod cell;
pub mod error;
pub mod position;
pub mod rng;

pub use action::{Action, ActionRecord, Captures};
pub use board::{Board, RawBoard};
pub use cell::{Cell, Color};
pub use error::{BoardError, ConfigError, RuleViolation};
pub use position::{Direction, Move, Position};
pub use rng::{GameRng, GameRngState};
