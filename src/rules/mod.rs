//! Seega board geometry rules.
//!
//! Pure functions over a `&Board`:
//! - Center-cell test
//! - Custodian capture detection
//! - Legal move existence and enumeration
//! - Placement candidates
//!
//! The game calls into these but owns all mutation.

pub mod capture;
pub mod movement;

pub use capture::{captures_at, is_center, move_captures};
pub use movement::{has_possible_move, legal_moves, placement_candidates};
