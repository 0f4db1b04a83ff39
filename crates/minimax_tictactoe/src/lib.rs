//! Tic-tac-toe rules engine and minimax opponent.
//!
//! A human plays a computer on a 3x3 board. The computer picks its moves
//! with a full-depth minimax search over every legal continuation.
//!
//! # Architecture
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Outcome`]
//! - **Positions**: [`Position`] names the nine cells in row-major order
//! - **Rules**: pure functions over a board ([`empty_cells`], [`has_winner`],
//!   [`is_terminal`], [`evaluate`], [`apply_move`])
//! - **Search**: [`minimax`] and the turn-level entry point [`best_move`]
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{apply_move, best_move, Board, Player, Position};
//!
//! let mut board = Board::new();
//! apply_move(&mut board, Position::Center, Player::Human).unwrap();
//!
//! let reply = best_move(&mut board, Player::Computer);
//! assert!(reply.is_some());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use position::Position;
pub use rules::{
    apply_move, check_winner, empty_cells, evaluate, has_winner, is_draw, is_full, is_terminal,
    LINES,
};
pub use search::{best_move, minimax, SearchResult, OPENING_MOVE};
pub use types::{Board, Outcome, Player, Square};

/// Alias used by front ends that talk about marks rather than sides.
pub type Mark = Player;
