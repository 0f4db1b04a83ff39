//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The search engine calls
//! these at every node, so nothing here allocates beyond the empty-cell
//! list or opens tracing spans.

mod draw;
mod moves;
mod score;
mod win;

pub use draw::{is_draw, is_full};
pub use moves::{apply_move, empty_cells};
pub use score::evaluate;
pub use win::{check_winner, has_winner, is_terminal, LINES};
