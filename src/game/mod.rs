//! Seega match state machine.
//!
//! A match runs in two stages:
//! - **Placing pieces**: sides alternate, dropping two pieces per turn, until
//!   every cell but the center is filled
//! - **Playing**: sides slide one piece one step per turn; a piece flanked
//!   orthogonally by two enemies is captured
//!
//! The first side reduced to zero pieces loses. A side with no legal move
//! is skipped and the other side plays again.

mod config;
mod engine;
mod stage;

pub use config::{GameConfig, MIN_DIMENSION};
pub use engine::{Game, PIECES_PER_PLACEMENT_TURN};
pub use stage::Stage;
