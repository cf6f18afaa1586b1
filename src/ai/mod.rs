//! Computer-controlled play.
//!
//! The game holds an [`AiStrategy`] and asks its [`AiPolicy`] for a choice
//! whenever `let_ai_play` is called on the computer's turn.

pub mod policy;

pub use policy::{AiPolicy, AiStrategy, HeuristicPolicy, RandomPolicy};
