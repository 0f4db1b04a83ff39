//! Text rendering of the board.

use crate::Symbol;
use minimax_tictactoe::{Board, Mark, Position, Square};

/// Which symbol each side is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    human: Symbol,
    computer: Symbol,
}

impl Glyphs {
    /// The human takes `symbol`, the computer the other one.
    pub fn for_human(symbol: Symbol) -> Self {
        Self {
            human: symbol,
            computer: symbol.other(),
        }
    }

    /// Symbol for a side.
    pub fn symbol(&self, mark: Mark) -> Symbol {
        match mark {
            Mark::Human => self.human,
            Mark::Computer => self.computer,
        }
    }
}

/// Formats the board; empty squares show the key that selects them.
pub fn render_board(board: &Board, glyphs: &Glyphs) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let Some(pos) = Position::from_coords(row, col) else {
                continue;
            };
            let symbol = match board.get(pos) {
                Square::Empty => char::from(b'0' + pos.key() as u8),
                Square::Occupied(mark) => glyphs.symbol(mark).glyph(),
            };
            result.push(' ');
            result.push(symbol);
            result.push(' ');
            if col < 2 {
                result.push('|');
            }
        }
        result.push('\n');
        if row < 2 {
            result.push_str("---+---+---\n");
        }
    }
    result
}
