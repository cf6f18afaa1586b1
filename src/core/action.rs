//! Actions and the per-game action history.
//!
//! Seega has exactly two verbs: drop a piece on an empty cell during the
//! placement stage, and slide a piece one step during the playing stage.
//! Every successful action is appended to the game's history as an
//! [`ActionRecord`].

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::Color;
use super::position::{Move, Position};

/// Positions captured by a single move. A landing piece can flank at most
/// one enemy per direction.
pub type Captures = SmallVec<[Position; 4]>;

/// A player action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Put a new piece on an empty cell.
    Place(Position),
    /// Slide a piece one orthogonal step.
    Move(Move),
}

impl Action {
    /// Check if this is a placement.
    #[must_use]
    pub const fn is_place(&self) -> bool {
        matches!(self, Action::Place(_))
    }

    /// Check if this is a move.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Action::Move(_))
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(pos) => write!(f, "place {}", pos),
            Action::Move(mv) => write!(f, "move {}", mv),
        }
    }
}

/// Record of an applied action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Side that acted.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Zero-based position in the game's history.
    pub sequence: usize,

    /// Pieces removed by this action (always empty for placements).
    pub captured: Captures,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kinds() {
        let place = Action::Place(Position::new(0, 0));
        let mv = Action::Move(Move::new(Position::new(0, 0), Position::new(0, 1)));

        assert!(place.is_place());
        assert!(!place.is_move());
        assert!(mv.is_move());
        assert!(!mv.is_place());
    }

    #[test]
    fn test_action_display() {
        assert_eq!(format!("{}", Action::Place(Position::new(1, 3))), "place (1, 3)");
        let mv = Move::new(Position::new(1, 3), Position::new(2, 3));
        assert_eq!(format!("{}", Action::Move(mv)), "move (1, 3) -> (2, 3)");
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord {
            color: Color::Red,
            action: Action::Move(Move::new(Position::new(0, 0), Position::new(1, 0))),
            sequence: 30,
            captured: Captures::from_slice(&[Position::new(2, 0)]),
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
