//! Pre-game questions: symbol and turn order.

use crate::{Symbol, Terminal};
use anyhow::Result;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Asks which symbol the human wants until they answer X or O.
///
/// Returns `None` at end of input.
#[instrument(skip(term))]
pub fn ask_symbol(term: &mut dyn Terminal) -> Result<Option<Symbol>> {
    loop {
        let Some(answer) = term.prompt("Choose your symbol (X or O): ")? else {
            return Ok(None);
        };
        match Symbol::from_str(answer.trim()) {
            Ok(symbol) => {
                debug!(%symbol, "Symbol chosen");
                return Ok(Some(symbol));
            }
            Err(_) => term.write_line("Please answer X or O")?,
        }
    }
}

/// Asks whether the human wants to move first until they answer y or n.
///
/// Returns `None` at end of input.
#[instrument(skip(term))]
pub fn ask_human_first(term: &mut dyn Terminal) -> Result<Option<bool>> {
    loop {
        let Some(answer) = term.prompt("Do you want to go first? (y/n): ")? else {
            return Ok(None);
        };
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => return Ok(Some(true)),
            "n" | "no" => return Ok(Some(false)),
            _ => term.write_line("Please answer y or n")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Console;

    #[test]
    fn test_symbol_retries_until_valid() {
        let mut console = Console::new(&b"z\n\no\n"[..], Vec::new(), false);
        assert_eq!(ask_symbol(&mut console).unwrap(), Some(Symbol::O));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert_eq!(output.matches("Please answer X or O").count(), 2);
    }

    #[test]
    fn test_turn_order_answers() {
        let mut console = Console::new(&b"maybe\nY\nno\n"[..], Vec::new(), false);
        assert_eq!(ask_human_first(&mut console).unwrap(), Some(true));
        assert_eq!(ask_human_first(&mut console).unwrap(), Some(false));
    }

    #[test]
    fn test_end_of_input() {
        let mut console = Console::new(&b""[..], Vec::new(), false);
        assert_eq!(ask_symbol(&mut console).unwrap(), None);
        assert_eq!(ask_human_first(&mut console).unwrap(), None);
    }
}
