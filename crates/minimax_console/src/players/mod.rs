//! Player trait and implementations.

mod human;
mod minimax;

pub use human::HumanPlayer;
pub use minimax::MinimaxPlayer;

use crate::Terminal;
use anyhow::Result;
use minimax_tictactoe::{Board, Position};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// Returns `None` if the player left the game. The position is not
    /// checked against the board here; the orchestrator applies it and asks
    /// again if the square is taken.
    fn get_move(&mut self, board: &Board, term: &mut dyn Terminal) -> Result<Option<Position>>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
