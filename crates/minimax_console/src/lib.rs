//! Console tic-tac-toe against a minimax opponent.
//!
//! This crate is the shell around [`minimax_tictactoe`]: it asks the human
//! for a symbol and turn order, draws the board, reads moves from the
//! keyboard and asks the search engine for the computer's replies.
//!
//! # Architecture
//!
//! - **Config**: [`GameConfig`] loaded from TOML, overridden from the CLI
//! - **Console**: the [`Terminal`] trait and its line-based [`Console`]
//! - **Players**: [`HumanPlayer`] and [`MinimaxPlayer`] behind [`Player`]
//! - **Orchestrator**: the turn loop, [`Orchestrator`]
//! - **Session**: prompts plus one game, [`play_session`]
//! - **Self-play**: the engine against itself, [`play_self`]
//!
//! # Example
//!
//! ```
//! use minimax_console::{play_session, Console, GameConfig, GameOver};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default().with_computer_delay_ms(0);
//! let input: &[u8] = b"X\ny\n5\n1\n2\n3\n4\n6\n7\n8\n9\n";
//! let mut console = Console::new(input, Vec::new(), false);
//!
//! let over = play_session(&config, &mut console)?;
//! assert_ne!(over, GameOver::Abandoned);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod orchestrator;
mod players;
mod render;
mod self_play;
mod session;
mod setup;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigOverrides, GameConfig, Symbol};

// Crate-level exports - Terminal access
pub use console::{Console, Terminal};

// Crate-level exports - Turn loop
pub use orchestrator::{GameOver, Orchestrator};

// Crate-level exports - Players
pub use players::{HumanPlayer, MinimaxPlayer, Player};

// Crate-level exports - Rendering
pub use render::{render_board, Glyphs};

// Crate-level exports - Self-play
pub use self_play::{play_self, SelfPlayGame};

// Crate-level exports - Sessions
pub use session::play_session;
pub use setup::{ask_human_first, ask_symbol};
