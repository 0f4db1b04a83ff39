//! Legal-move enumeration and validated placement.

use crate::{Board, MoveError, Player, Position, Square};
use tracing::{debug, instrument};

/// Every empty cell, in row-major order.
///
/// The order is part of the contract: the search breaks ties in favour of
/// whichever equally-scored move it meets first.
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty(pos))
        .collect()
}

/// Places `player`'s mark at `pos` if the square is empty.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] and leaves the board untouched if
/// the square already holds a mark.
#[instrument(skip(board))]
pub fn apply_move(board: &mut Board, pos: Position, player: Player) -> Result<(), MoveError> {
    if !board.is_empty(pos) {
        debug!("Square already occupied");
        return Err(MoveError::SquareOccupied(pos));
    }

    board.set(pos, Square::Occupied(player));
    Ok(())
}
