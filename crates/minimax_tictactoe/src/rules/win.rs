//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};

/// The eight winning lines: three rows, three columns, two diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::BottomLeft, Position::Center, Position::TopRight],
];

/// Checks whether `player` fills any of the eight lines.
///
/// Each side is checked on its own. A board where both sides have a line
/// cannot come out of alternating play and gets no special treatment.
pub fn has_winner(board: &Board, player: Player) -> bool {
    let mark = Square::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&pos| board.get(pos) == mark))
}

/// Returns the player holding a line, if any.
///
/// The computer is checked first, matching [`evaluate`](crate::evaluate).
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::Computer, Player::Human]
        .into_iter()
        .find(|&player| has_winner(board, player))
}

/// True iff either side has a line.
///
/// A full board with no line is not terminal here; exhaustion shows up as
/// an empty [`empty_cells`](crate::empty_cells) list instead.
pub fn is_terminal(board: &Board) -> bool {
    has_winner(board, Player::Human) || has_winner(board, Player::Computer)
}
