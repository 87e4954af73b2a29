//! Game rules for tic-tac-toe.
//!
//! Pure functions that classify a board after a move. Board storage and
//! turn bookkeeping live elsewhere; this module only reads.

mod win;

use crate::board::Board;
use crate::types::{GameState, Turn};
use tracing::{debug, instrument};

use win::is_winning;

/// Computes the state that follows a move by `mover`.
///
/// Only the mover's piece is checked for a line: the opponent could not have
/// completed one on this move.
#[instrument(skip(board))]
pub(crate) fn evaluate(board: &Board, mover: Turn) -> GameState {
    let state = if is_winning(board, mover.piece()) {
        GameState::win_for(mover)
    } else if board.is_full() {
        GameState::Draw
    } else {
        GameState::NotOver
    };
    debug!(?state, "Evaluated board");
    state
}
