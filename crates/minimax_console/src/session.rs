//! One interactive game: setup questions, then the turn loop.

use crate::{
    ask_human_first, ask_symbol, GameConfig, GameOver, Glyphs, HumanPlayer, MinimaxPlayer,
    Orchestrator, Terminal,
};
use anyhow::Result;
use minimax_tictactoe::Mark;
use tracing::{info, instrument};

/// Plays one game on `term`, asking for whatever `config` leaves unset.
#[instrument(skip_all)]
pub fn play_session(config: &GameConfig, term: &mut dyn Terminal) -> Result<GameOver> {
    term.write_line("### TIC-TAC-TOE ###")?;

    let symbol = match *config.human_symbol() {
        Some(symbol) => symbol,
        None => match ask_symbol(term)? {
            Some(symbol) => symbol,
            None => return abandon(term),
        },
    };

    let human_first = match *config.human_first() {
        Some(first) => first,
        None => match ask_human_first(term)? {
            Some(first) => first,
            None => return abandon(term),
        },
    };

    let first = if human_first { Mark::Human } else { Mark::Computer };
    info!(%symbol, %first, "Session configured");

    let mut orchestrator = Orchestrator::new(
        Box::new(HumanPlayer::new("Human")),
        Box::new(MinimaxPlayer::new("Computer", config.computer_delay())),
        Glyphs::for_human(symbol),
    );
    orchestrator.run(term, first)
}

fn abandon(term: &mut dyn Terminal) -> Result<GameOver> {
    term.write_line("Bye!")?;
    Ok(GameOver::Abandoned)
}
