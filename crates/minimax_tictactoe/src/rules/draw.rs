//! Draw detection logic for tic-tac-toe.

use super::win::is_terminal;
use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !is_terminal(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    const H: Square = Square::Occupied(Player::Human);
    const C: Square = Square::Occupied(Player::Computer);
    const E: Square = Square::Empty;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, H);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // H C H / H C C / C H H
        let board = Board::from_rows([[H, C, H], [H, C, C], [C, H, H]]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Human wins the top row on the last move
        let board = Board::from_rows([[H, H, H], [C, C, H], [C, H, C]]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_cells_remain() {
        let board = Board::from_rows([[H, C, H], [H, C, C], [C, H, E]]);
        assert!(!is_draw(&board));
    }
}
