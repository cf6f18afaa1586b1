//! Cell contents and side colors.
//!
//! ## Cell
//!
//! Tri-state board cell: empty or occupied by one of the two sides.
//! Pieces carry no identity beyond their color.
//!
//! ## Color
//!
//! The two sides of a Seega match. Every `Color` maps onto exactly one
//! occupied `Cell`.

use serde::{Deserialize, Serialize};

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Yellow,
    Red,
}

impl Cell {
    /// Check if the cell holds no piece.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Color of the piece on this cell, if any.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Yellow => Some(Color::Yellow),
            Cell::Red => Some(Color::Red),
        }
    }

    /// Check if the cell holds a piece of `color`.
    #[must_use]
    pub fn holds(self, color: Color) -> bool {
        self == Cell::from(color)
    }
}

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Yellow,
    Red,
}

impl Color {
    /// Both colors, yellow first.
    pub const ALL: [Color; 2] = [Color::Yellow, Color::Red];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Yellow => Color::Red,
            Color::Red => Color::Yellow,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Yellow => Cell::Yellow,
            Color::Red => Cell::Red,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Yellow => write!(f, "Yellow"),
            Color::Red => write!(f, "Red"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involution() {
        for color in Color::ALL {
            assert_ne!(color.opponent(), color);
            assert_eq!(color.opponent().opponent(), color);
        }
    }

    #[test]
    fn test_cell_color_mapping() {
        assert_eq!(Cell::Empty.color(), None);
        assert_eq!(Cell::Yellow.color(), Some(Color::Yellow));
        assert_eq!(Cell::Red.color(), Some(Color::Red));

        for color in Color::ALL {
            assert_eq!(Cell::from(color).color(), Some(color));
            assert!(Cell::from(color).holds(color));
            assert!(!Cell::from(color).holds(color.opponent()));
        }
    }

    #[test]
    fn test_default_cell_is_empty() {
        assert!(Cell::default().is_empty());
        assert!(!Cell::Red.is_empty());
    }

    #[test]
    fn test_color_display() {
        assert_eq!(format!("{}", Color::Yellow), "Yellow");
        assert_eq!(format!("{}", Color::Red), "Red");
    }
}
