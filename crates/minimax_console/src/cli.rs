//! Command-line interface for minimax_console.

use clap::{Args, Parser, Subcommand, ValueEnum};
use minimax_console::{ConfigOverrides, Symbol};
use minimax_tictactoe::Mark;
use std::path::PathBuf;

/// Tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "minimax_console")]
#[command(about = "Play tic-tac-toe against a minimax search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play(PlayArgs),

    /// Let the search play against itself and report the results
    SelfPlay(SelfPlayArgs),
}

/// Options for engine-versus-engine games.
#[derive(Args, Debug)]
pub struct SelfPlayArgs {
    /// Number of games to play
    #[arg(short, long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..))]
    pub games: u32,

    /// Side that opens every game; openers alternate by default, computer first
    #[arg(long)]
    pub first: Option<Side>,
}

impl SelfPlayArgs {
    /// Opening side for each game, in play order.
    pub fn openers(&self) -> Vec<Mark> {
        (0..self.games)
            .map(|game| match self.first {
                Some(side) => side.into(),
                None if game % 2 == 0 => Mark::Computer,
                None => Mark::Human,
            })
            .collect()
    }
}

/// Options for an interactive game. Unset options fall back to the config
/// file, then to a prompt.
#[derive(Args, Debug, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file [default: minimax_console.toml, if present]
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Your symbol (X or O)
    #[arg(short, long)]
    pub symbol: Option<Symbol>,

    /// Who moves first
    #[arg(short, long)]
    pub first: Option<Side>,

    /// Pause after each computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Clear the screen before every turn
    #[arg(long, conflicts_with = "no_clear")]
    pub clear: bool,

    /// Never clear the screen, even if the config file asks for it
    #[arg(long)]
    pub no_clear: bool,
}

impl PlayArgs {
    /// The values given on the command line, to lay over the config file.
    pub fn overrides(&self) -> ConfigOverrides {
        let clear_screen = match (self.clear, self.no_clear) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        ConfigOverrides {
            human_symbol: self.symbol,
            human_first: self.first.map(|side| side == Side::Human),
            computer_delay_ms: self.delay_ms,
            clear_screen,
        }
    }
}

/// A side, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Side {
    /// You
    Human,
    /// The search engine
    Computer,
}

impl From<Side> for Mark {
    fn from(side: Side) -> Self {
        match side {
            Side::Human => Mark::Human,
            Side::Computer => Mark::Computer,
        }
    }
}
