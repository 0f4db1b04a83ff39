//! Cell coordinates on the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A cell on the tic-tac-toe board.
///
/// Variants are declared in row-major order, which is also the order the
/// search visits candidate moves in. Coordinates outside the grid cannot be
/// represented; front ends go through [`Position::from_coords`] or
/// [`Position::from_key`] to get one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Position {
    /// Top-left (row 0, column 0)
    TopLeft,
    /// Top-center (row 0, column 1)
    TopCenter,
    /// Top-right (row 0, column 2)
    TopRight,
    /// Middle-left (row 1, column 0)
    MiddleLeft,
    /// Center (row 1, column 1)
    Center,
    /// Middle-right (row 1, column 2)
    MiddleRight,
    /// Bottom-left (row 2, column 0)
    BottomLeft,
    /// Bottom-center (row 2, column 1)
    BottomCenter,
    /// Bottom-right (row 2, column 2)
    BottomRight,
}

impl Position {
    /// All 9 positions, row-major.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Creates position from a (row, column) pair, rejecting anything off the grid.
    pub fn from_coords(row: usize, col: usize) -> Option<Self> {
        if row >= 3 || col >= 3 {
            return None;
        }
        Self::from_index(row * 3 + col)
    }

    /// Keypad number shown to players (1-9).
    pub fn key(self) -> usize {
        self.to_index() + 1
    }

    /// Creates position from the keypad number a player typed (1-9).
    pub fn from_key(key: usize) -> Option<Self> {
        key.checked_sub(1).and_then(Self::from_index)
    }

    /// Parses player input: a keypad number (1-9) or a label, case-insensitive.
    #[instrument]
    pub fn from_key_or_label(s: &str) -> Option<Position> {
        let s = s.trim();
        if let Ok(key) = s.parse::<usize>() {
            return Self::from_key(key);
        }

        <Position as strum::IntoEnumIterator>::iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(s))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coords_round_trip_every_cell() {
        for pos in Position::ALL {
            assert_eq!(Position::from_coords(pos.row(), pos.col()), Some(pos));
        }
    }

    #[test]
    fn test_from_coords_rejects_off_grid() {
        assert_eq!(Position::from_coords(3, 0), None);
        assert_eq!(Position::from_coords(0, 3), None);
        assert_eq!(Position::from_coords(2, 2), Some(Position::BottomRight));
    }

    #[test]
    fn test_keys_are_one_based() {
        assert_eq!(Position::from_key(1), Some(Position::TopLeft));
        assert_eq!(Position::from_key(5), Some(Position::Center));
        assert_eq!(Position::from_key(9), Some(Position::BottomRight));
        assert_eq!(Position::from_key(0), None);
        assert_eq!(Position::from_key(10), None);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(Position::from_key_or_label(" 3 "), Some(Position::TopRight));
        assert_eq!(Position::from_key_or_label("center"), Some(Position::Center));
        assert_eq!(Position::from_key_or_label("BOTTOM-LEFT"), Some(Position::BottomLeft));
        assert_eq!(Position::from_key_or_label("-1"), None);
        assert_eq!(Position::from_key_or_label(""), None);
        assert_eq!(Position::from_key_or_label("top"), None);
    }
}
