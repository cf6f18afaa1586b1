//! # seega
//!
//! Rules engine for Seega, a two-phase custodian-capture board game played
//! on an N×N grid.
//!
//! ## Design Principles
//!
//! 1. **Single Mutator**: `Game` owns the board and is the only thing that
//!    changes it. Renderers get a `&Board`.
//!
//! 2. **Atomic Actions**: An action either applies completely (placement or
//!    move, captures, turn hand-off) or not at all.
//!
//! 3. **Seeded Randomness**: The first-move toss and every AI decision draw
//!    from one RNG owned by the game. Same seed, same match.
//!
//! ## Modules
//!
//! - `core`: Cells, colors, positions, board, RNG, errors
//! - `rules`: Capture detection and legal move enumeration
//! - `game`: The placement/playing/end state machine and match configuration
//! - `ai`: Policies for the computer-controlled side
//!
//! ## Example
//!
//! ```
//! use seega::{Game, Stage};
//!
//! let mut game = Game::new(5, true, 7);
//! assert_eq!(game.stage(), Stage::PlacingPieces);
//!
//! // The human moves first; the computer plays the other color.
//! assert!(!game.is_ai_turn());
//! assert!(game.place_piece(0, 0));
//! assert!(game.place_piece(0, 1));
//!
//! assert!(game.is_ai_turn());
//! assert!(game.let_ai_play());
//! ```

pub mod ai;
pub mod core;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Board, BoardError, Captures, Cell, Color, ConfigError, Direction,
    GameRng, GameRngState, Move, Position, RuleViolation,
};

pub use crate::game::{Game, GameConfig, Stage};

pub use crate::ai::{AiPolicy, AiStrategy, HeuristicPolicy, RandomPolicy};
