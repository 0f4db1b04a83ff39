//! Computer player backed by the minimax search.

use super::Player;
use crate::Terminal;
use anyhow::Result;
use minimax_tictactoe::{best_move, Board, Mark, Position};
use std::time::Duration;
use tracing::{debug, instrument};

/// Computer player that searches the full game tree each turn.
pub struct MinimaxPlayer {
    name: String,
    delay: Duration,
}

impl MinimaxPlayer {
    /// Creates a new computer player that pauses for `delay` after choosing.
    pub fn new(name: impl Into<String>, delay: Duration) -> Self {
        Self {
            name: name.into(),
            delay,
        }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(ai = %self.name))]
    fn get_move(&mut self, board: &Board, _term: &mut dyn Terminal) -> Result<Option<Position>> {
        // The search needs exclusive access; it works on its own copy.
        let mut scratch = board.clone();
        let Some(pos) = best_move(&mut scratch, Mark::Computer) else {
            anyhow::bail!("No valid moves available");
        };
        debug!(position = %pos, "AI chose position");

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        Ok(Some(pos))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Console;
    use minimax_tictactoe::Square;

    fn quiet_console() -> Console<&'static [u8], Vec<u8>> {
        Console::new(&b""[..], Vec::new(), false)
    }

    #[test]
    fn test_opens_in_corner() {
        let mut ai = MinimaxPlayer::new("Computer", Duration::ZERO);
        let pos = ai.get_move(&Board::new(), &mut quiet_console()).unwrap();
        assert_eq!(pos, Some(Position::TopLeft));
    }

    #[test]
    fn test_blocks_human_line() {
        let h = Square::Occupied(Mark::Human);
        let c = Square::Occupied(Mark::Computer);
        let e = Square::Empty;
        let board = Board::from_rows([[h, h, e], [e, c, e], [e, e, e]]);

        let mut ai = MinimaxPlayer::new("Computer", Duration::ZERO);
        let pos = ai.get_move(&board, &mut quiet_console()).unwrap();
        assert_eq!(pos, Some(Position::TopRight));
    }

    #[test]
    fn test_errors_when_game_is_over() {
        let c = Square::Occupied(Mark::Computer);
        let h = Square::Occupied(Mark::Human);
        let e = Square::Empty;
        let board = Board::from_rows([[c, c, c], [h, h, e], [e, e, e]]);

        let mut ai = MinimaxPlayer::new("Computer", Duration::ZERO);
        assert!(ai.get_move(&board, &mut quiet_console()).is_err());
    }
}
