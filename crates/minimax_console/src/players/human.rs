//! Human player that types moves at the keyboard.

use super::Player;
use crate::Terminal;
use anyhow::Result;
use minimax_tictactoe::{Board, Position};
use tracing::debug;

/// Human player reading keypad numbers (1-9) or cell labels.
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, _board: &Board, term: &mut dyn Terminal) -> Result<Option<Position>> {
        loop {
            let Some(line) = term.prompt("Enter a number from 1 to 9: ")? else {
                return Ok(None);
            };

            match Position::from_key_or_label(&line) {
                Some(pos) => {
                    debug!(player = %self.name, position = %pos, "Human chose position");
                    return Ok(Some(pos));
                }
                None => {
                    debug!(player = %self.name, input = %line, "Unparseable move");
                    term.write_line("Invalid move")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
