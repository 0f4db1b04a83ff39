//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Glyph a side is drawn with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// Cross.
    #[serde(alias = "x")]
    X,
    /// Nought.
    #[serde(alias = "o")]
    O,
}

impl Symbol {
    /// The symbol left for the other side.
    pub fn other(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    /// Character drawn on the board.
    pub fn glyph(self) -> char {
        match self {
            Symbol::X => 'X',
            Symbol::O => 'O',
        }
    }
}

/// Settings for an interactive game.
///
/// Fields left unset (`None`) are asked for at the start of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Symbol the human plays with.
    #[serde(default)]
    human_symbol: Option<Symbol>,

    /// Whether the human moves first.
    #[serde(default)]
    human_first: Option<bool>,

    /// Pause after each computer move, in milliseconds.
    #[serde(default = "default_computer_delay_ms")]
    computer_delay_ms: u64,

    /// Clear the terminal before each turn.
    #[serde(default)]
    clear_screen: bool,
}

fn default_computer_delay_ms() -> u64 {
    1000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_symbol: None,
            human_first: None,
            computer_delay_ms: default_computer_delay_ms(),
            clear_screen: false,
        }
    }
}

impl GameConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?config, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Pause after each computer move.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Applies command-line values over this configuration.
    ///
    /// Every value that is set in `overrides` replaces the one loaded from
    /// the file; unset values leave it alone.
    #[instrument(skip(self))]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(symbol) = overrides.human_symbol {
            self.human_symbol = Some(symbol);
        }
        if let Some(first) = overrides.human_first {
            self.human_first = Some(first);
        }
        if let Some(delay_ms) = overrides.computer_delay_ms {
            self.computer_delay_ms = delay_ms;
        }
        if let Some(clear) = overrides.clear_screen {
            self.clear_screen = clear;
        }
        debug!(config = ?self, "Applied overrides");
        self
    }
}

/// Values given on the command line. `None` keeps the configured value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct ConfigOverrides {
    /// Symbol the human plays with.
    pub human_symbol: Option<Symbol>,
    /// Whether the human moves first.
    pub human_first: Option<bool>,
    /// Pause after each computer move, in milliseconds.
    pub computer_delay_ms: Option<u64>,
    /// Clear the terminal before each turn.
    pub clear_screen: Option<bool>,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
