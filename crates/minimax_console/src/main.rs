//! minimax_console - play tic-tac-toe against a minimax search.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs, SelfPlayArgs};
use minimax_console::{
    play_self, play_session, render_board, Console, GameConfig, Glyphs, Symbol,
};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when no path is given.
const DEFAULT_CONFIG_PATH: &str = "minimax_console.toml";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Some(Command::Play(args)) => run_play(args),
        Some(Command::SelfPlay(args)) => run_self_play(&args),
        None => run_play(PlayArgs::default()),
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run an interactive game
#[instrument(skip_all, fields(config_path = ?args.config))]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = load_game_config(&args)?;
    let mut console = Console::stdio(*config.clear_screen());

    let over = play_session(&config, &mut console)?;
    info!(?over, "Session finished");
    Ok(())
}

/// Config file values, with command-line flags taking precedence.
#[instrument(skip_all)]
fn load_game_config(args: &PlayArgs) -> Result<GameConfig> {
    let config = match &args.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => GameConfig::load_or_default(DEFAULT_CONFIG_PATH)
            .with_context(|| format!("Loading {}", DEFAULT_CONFIG_PATH))?,
    }
    .with_overrides(&args.overrides());

    info!(?config, "Effective configuration");
    Ok(config)
}

/// Run engine-versus-engine games and fail unless all of them are drawn
#[instrument(skip_all, fields(games = args.games, first = ?args.first))]
fn run_self_play(args: &SelfPlayArgs) -> Result<()> {
    // Max plays X, min plays O.
    let glyphs = Glyphs::for_human(Symbol::O);

    let mut all_drawn = true;
    for opener in args.openers() {
        let game = play_self(opener)?;
        println!("{} ({}) opens", opener, glyphs.symbol(opener));
        println!("{}", render_board(game.board(), &glyphs));

        match game.winner() {
            Some(winner) => {
                warn!(%winner, "Self-play game was won");
                println!("{winner} wins\n");
                all_drawn = false;
            }
            None => println!("Draw\n"),
        }
    }

    anyhow::ensure!(all_drawn, "optimal self-play must always draw");
    Ok(())
}
