//! Core domain types for tic-tac-toe.

use crate::Position;
use serde::{Deserialize, Serialize};

/// Side in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Player {
    /// The person at the keyboard. Minimizes the score.
    Human,
    /// The search engine. Maximizes the score.
    Computer,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board does not police turn order or bounds; [`crate::apply_move`]
/// is the validated entry point and [`Board::set`] the raw one the search
/// uses for place/undo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows, top to bottom.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Overwrites the square at the given position, occupied or not.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&square| square == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Value of a board from the computer's point of view.
///
/// Ongoing games and draws share a value; callers that need to tell them
/// apart check for empty cells separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The human has a line.
    HumanWin,
    /// Nobody has a line.
    DrawOrOngoing,
    /// The computer has a line.
    ComputerWin,
}

impl Outcome {
    /// Signed score used by the search: -1, 0 or +1.
    pub fn score(self) -> i32 {
        match self {
            Outcome::HumanWin => -1,
            Outcome::DrawOrOngoing => 0,
            Outcome::ComputerWin => 1,
        }
    }

    /// Maps a realised score back to an outcome.
    pub fn from_score(score: i32) -> Option<Self> {
        match score {
            -1 => Some(Outcome::HumanWin),
            0 => Some(Outcome::DrawOrOngoing),
            1 => Some(Outcome::ComputerWin),
            _ => None,
        }
    }
}

impl From<Outcome> for i32 {
    fn from(outcome: Outcome) -> Self {
        outcome.score()
    }
}
