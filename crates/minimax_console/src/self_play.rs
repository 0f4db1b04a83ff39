//! The search engine playing both sides.

use derive_getters::Getters;
use minimax_tictactoe::{apply_move, best_move, check_winner, Board, Mark, Move, MoveError};
use tracing::{info, instrument};

/// A finished engine-versus-engine game.
#[derive(Debug, Clone, Getters)]
pub struct SelfPlayGame {
    /// Side that moved first.
    first: Mark,
    /// Final board.
    board: Board,
    /// Moves in the order they were played.
    history: Vec<Move>,
}

impl SelfPlayGame {
    /// The side holding a line, if any.
    pub fn winner(&self) -> Option<Mark> {
        check_winner(&self.board)
    }
}

/// Plays a full game where both sides use [`best_move`].
///
/// The computer side maximizes and the human side minimizes, so this is
/// optimal play from both ends and always ends in a draw.
///
/// # Errors
///
/// Returns [`MoveError`] if the search ever picks an occupied square.
#[instrument]
pub fn play_self(first: Mark) -> Result<SelfPlayGame, MoveError> {
    let mut board = Board::new();
    let mut history = Vec::new();
    let mut to_move = first;

    while let Some(pos) = best_move(&mut board, to_move) {
        apply_move(&mut board, pos, to_move)?;
        history.push(Move::new(to_move, pos));
        to_move = to_move.opponent();
    }

    info!(moves = history.len(), winner = ?check_winner(&board), "Self-play finished");
    Ok(SelfPlayGame {
        first,
        board,
        history,
    })
}
