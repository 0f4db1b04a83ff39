//! Line-based terminal access.

use anyhow::{Context, Result};
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{BufRead, StdinLock, Stdout, Write};
use tracing::{debug, instrument};

/// What the game needs from a terminal.
///
/// Kept object-safe so players can take `&mut dyn Terminal`.
pub trait Terminal {
    /// Reads one line without its line ending. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes text as-is and flushes.
    fn write_str(&mut self, text: &str) -> Result<()>;

    /// Clears the screen, if enabled.
    fn clear(&mut self) -> Result<()>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, text: &str) -> Result<()> {
        self.write_str(text)?;
        self.write_str("\n")
    }

    /// Shows a prompt and reads the answer.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write_str(text)?;
        self.read_line()
    }
}

/// Terminal over any reader/writer pair.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console over the given streams.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Returns the output stream.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console on the process's stdin and stdout.
    pub fn stdio(clear_screen: bool) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), clear_screen)
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;

        if read == 0 {
            debug!("End of input");
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
        debug!(line = %trimmed, "Read line");
        Ok(Some(trimmed))
    }

    fn write_str(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("Failed to write to terminal")?;
        self.output.flush().context("Failed to flush terminal")
    }

    fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
                .context("Failed to clear terminal")?;
        }
        Ok(())
    }
}
