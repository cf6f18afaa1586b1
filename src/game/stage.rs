//! Match stages.

use serde::{Deserialize, Serialize};

/// Stage of a Seega match. Transitions only move forward:
/// `PlacingPieces → Playing → End`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Sides take turns dropping two pieces each until every cell but the
    /// center is filled.
    PlacingPieces,
    /// Sides slide pieces one step at a time, capturing by flanking.
    Playing,
    /// One side has no pieces left.
    End,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::PlacingPieces => write!(f, "placing pieces"),
            Stage::Playing => write!(f, "playing"),
            Stage::End => write!(f, "end"),
        }
    }
}
