//! Game orchestration between the human and the computer.

use crate::players::Player;
use crate::render::{render_board, Glyphs};
use crate::Terminal;
use anyhow::{Context, Result};
use minimax_tictactoe::{apply_move, check_winner, is_full, Board, Mark, Move};
use tracing::{debug, info, instrument, warn};

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOver {
    /// A side completed a line.
    Won(Mark),
    /// The board filled up with no line.
    Draw,
    /// The human closed the input before the game finished.
    Abandoned,
}

/// Runs one game between two players on a board it owns.
pub struct Orchestrator {
    board: Board,
    human: Box<dyn Player>,
    computer: Box<dyn Player>,
    glyphs: Glyphs,
    history: Vec<Move>,
}

impl Orchestrator {
    /// Creates a new orchestrator with an empty board.
    pub fn new(human: Box<dyn Player>, computer: Box<dyn Player>, glyphs: Glyphs) -> Self {
        Self {
            board: Board::new(),
            human,
            computer,
            glyphs,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Runs the game loop until someone wins, the board fills or the human leaves.
    #[instrument(skip(self, term))]
    pub fn run(&mut self, term: &mut dyn Terminal, first: Mark) -> Result<GameOver> {
        info!("Starting game orchestration");
        let mut to_move = first;

        let over = loop {
            if let Some(winner) = check_winner(&self.board) {
                break GameOver::Won(winner);
            }
            if is_full(&self.board) {
                break GameOver::Draw;
            }

            term.clear()?;
            let name = self.player(to_move).name().to_string();
            term.write_line(&format!(
                "{}'s turn [{}]",
                name,
                self.glyphs.symbol(to_move)
            ))?;
            term.write_line(&render_board(&self.board, &self.glyphs))?;

            if !self.take_turn(term, to_move)? {
                info!(player = %name, "Player left the game");
                term.write_line("Bye!")?;
                return Ok(GameOver::Abandoned);
            }

            to_move = to_move.opponent();
        };

        term.clear()?;
        term.write_line(&render_board(&self.board, &self.glyphs))?;
        term.write_line(match over {
            GameOver::Won(Mark::Human) => "You win!",
            GameOver::Won(Mark::Computer) => "You lose!",
            _ => "Draw!",
        })?;

        info!(?over, moves = self.history.len(), "Game over");
        Ok(over)
    }

    /// Asks `mark`'s player for moves until one lands. `false` if they left.
    ///
    /// Only the human is asked again after an occupied square; the computer
    /// would repeat the same choice, so its rejected move is an error.
    fn take_turn(&mut self, term: &mut dyn Terminal, mark: Mark) -> Result<bool> {
        loop {
            let player = match mark {
                Mark::Human => &mut self.human,
                Mark::Computer => &mut self.computer,
            };

            debug!(player = %player.name(), "Waiting for move");
            let Some(pos) = player.get_move(&self.board, term)? else {
                return Ok(false);
            };

            match apply_move(&mut self.board, pos, mark) {
                Ok(()) => {
                    self.history.push(Move::new(mark, pos));
                    return Ok(true);
                }
                Err(err) if mark == Mark::Computer => {
                    return Err(err).context("Computer chose an occupied square");
                }
                Err(err) => {
                    warn!(%err, "Move rejected");
                    term.write_line("Invalid move")?;
                }
            }
        }
    }

    fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::Human => self.human.as_ref(),
            Mark::Computer => self.computer.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Console, HumanPlayer, MinimaxPlayer, Symbol};
    use minimax_tictactoe::{Position, Square};
    use std::time::Duration;

    /// Always picks the centre, taken or not.
    struct CentreOnly;

    impl Player for CentreOnly {
        fn get_move(
            &mut self,
            _board: &Board,
            _term: &mut dyn Terminal,
        ) -> Result<Option<Position>> {
            Ok(Some(Position::Center))
        }

        fn name(&self) -> &str {
            "Centre"
        }
    }

    fn orchestrator() -> Orchestrator {
        Orchestrator::new(
            Box::new(HumanPlayer::new("You")),
            Box::new(MinimaxPlayer::new("Computer", Duration::ZERO)),
            Glyphs::for_human(Symbol::X),
        )
    }

    #[test]
    fn test_computer_opens_in_corner() {
        let mut game = orchestrator();
        let mut console = Console::new(&b""[..], Vec::new(), false);

        let over = game.run(&mut console, Mark::Computer).unwrap();
        assert_eq!(over, GameOver::Abandoned);
        assert_eq!(
            game.board().get(Position::TopLeft),
            Square::Occupied(Mark::Computer)
        );
        assert_eq!(game.history(), &[Move::new(Mark::Computer, Position::TopLeft)]);
    }

    #[test]
    fn test_occupied_square_is_rejected_and_reasked() {
        let mut game = orchestrator();
        // The computer takes 1; the human tries it again, then takes 5.
        let mut console = Console::new(&b"1\n5\n"[..], Vec::new(), false);

        game.run(&mut console, Mark::Computer).unwrap();
        assert_eq!(
            game.board().get(Position::Center),
            Square::Occupied(Mark::Human)
        );

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Invalid move").count(), 1);
    }

    #[test]
    fn test_lowest_free_square_strategy_never_wins() {
        for first in [Mark::Human, Mark::Computer] {
            let mut game = orchestrator();
            let mut console = Console::new(
                &b"1\n2\n3\n4\n5\n6\n7\n8\n9\n"[..],
                Vec::new(),
                false,
            );

            let over = game.run(&mut console, first).unwrap();
            assert!(
                matches!(over, GameOver::Won(Mark::Computer) | GameOver::Draw),
                "{first} first: {over:?}"
            );
        }
    }

    #[test]
    fn test_computer_occupied_square_is_an_error() {
        let mut game = Orchestrator::new(
            Box::new(HumanPlayer::new("You")),
            Box::new(CentreOnly),
            Glyphs::for_human(Symbol::X),
        );
        let mut console = Console::new(&b"5\n"[..], Vec::new(), false);

        let err = game.run(&mut console, Mark::Human).unwrap_err();
        assert!(err.to_string().contains("occupied square"));
        assert_eq!(game.history().len(), 1);

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(!output.contains("Invalid move"));
    }
}
