//! Exhaustive minimax search.
//!
//! The search walks every legal continuation to the end of the game on a
//! single board, placing a mark before each recursive call and clearing it
//! right after. The computer maximizes the score, the human minimizes it.

use crate::rules::{empty_cells, evaluate, is_terminal};
use crate::{Board, Outcome, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Move played on an empty board instead of searching.
pub const OPENING_MOVE: Position = Position::TopLeft;

/// Recommended move and its minimax value.
///
/// `position` is `None` at leaves, where there is no move to recommend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Move leading to `score`.
    pub position: Option<Position>,
    /// Minimax value: -1, 0 or +1 once any candidate was seen.
    pub score: i32,
}

impl SearchResult {
    /// Creates a new result.
    pub fn new(position: Option<Position>, score: i32) -> Self {
        Self { position, score }
    }

    /// Worst possible result for the side to move, beaten by any real score.
    fn seed(player: Player) -> Self {
        match player {
            Player::Computer => Self::new(None, i32::MIN),
            Player::Human => Self::new(None, i32::MAX),
        }
    }

    /// The score as an [`Outcome`], or `None` for an untouched seed.
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_score(self.score)
    }

    /// Whether `self` strictly improves on `best` for `player`.
    fn beats(&self, best: &Self, player: Player) -> bool {
        match player {
            Player::Computer => self.score > best.score,
            Player::Human => self.score < best.score,
        }
    }
}

/// Searches every continuation to `depth` plies and returns the best move
/// for `player`.
///
/// `depth` must equal the number of empty cells for the result to be exact;
/// a full board is only recognised through `depth` reaching zero. If
/// `depth` is positive but no cell is empty the seed comes back unchanged
/// (`None` with `i32::MIN` or `i32::MAX`).
///
/// Candidates are visited in row-major order and only a strictly better
/// score replaces the current best, so ties go to the earliest cell.
///
/// The board is borrowed mutably for the whole traversal and is returned
/// exactly as it was found.
pub fn minimax(board: &mut Board, depth: usize, player: Player) -> SearchResult {
    if depth == 0 || is_terminal(board) {
        return SearchResult::new(None, evaluate(board).score());
    }

    let mut best = SearchResult::seed(player);

    for pos in empty_cells(board) {
        board.set(pos, Square::Occupied(player));
        let mut candidate = minimax(board, depth - 1, player.opponent());
        board.set(pos, Square::Empty);

        // Relabel the deeper result with the move that leads to it.
        candidate.position = Some(pos);

        if candidate.beats(&best, player) {
            best = candidate;
        }
    }

    best
}

/// Picks `player`'s move for the current turn.
///
/// On an empty board this returns [`OPENING_MOVE`] without searching.
/// Returns `None` once the game is over.
#[instrument(skip(board))]
pub fn best_move(board: &mut Board, player: Player) -> Option<Position> {
    let depth = empty_cells(board).len();
    if depth == 0 || is_terminal(board) {
        debug!("Game is over, no move to pick");
        return None;
    }

    if depth == Position::ALL.len() {
        debug!(position = %OPENING_MOVE, "Playing fixed opening");
        return Some(OPENING_MOVE);
    }

    let result = minimax(board, depth, player);
    debug!(
        depth,
        position = ?result.position,
        score = result.score,
        "Search complete"
    );
    result.position
}
