//! Static evaluation of a board.

use super::win::has_winner;
use crate::{Board, Outcome, Player};

/// Scores a board from the computer's side.
pub fn evaluate(board: &Board) -> Outcome {
    if has_winner(board, Player::Computer) {
        Outcome::ComputerWin
    } else if has_winner(board, Player::Human) {
        Outcome::HumanWin
    } else {
        Outcome::DrawOrOngoing
    }
}
