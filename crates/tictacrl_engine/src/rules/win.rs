//! Win detection logic for tic-tac-toe.

use crate::board::{BOARD_SIZE, Board};
use crate::position::Position;
use crate::types::Cell;

/// Returns true if `piece` fills any row, column, or diagonal.
///
/// Lines are scanned rows, then columns, then the main diagonal, then the
/// anti-diagonal.
pub(crate) fn is_winning(board: &Board, piece: Cell) -> bool {
    debug_assert!(piece.is_piece(), "only X and O can form a line");

    (0..BOARD_SIZE).any(|row| check_row(board, row, piece))
        || (0..BOARD_SIZE).any(|column| check_column(board, column, piece))
        || check_main_diagonal(board, piece)
        || check_anti_diagonal(board, piece)
}

fn check_positions(board: &Board, mut positions: impl Iterator<Item = Position>, piece: Cell) -> bool {
    positions.all(|pos| board.check_cell_piece(pos) == piece)
}

fn check_row(board: &Board, row: usize, piece: Cell) -> bool {
    check_positions(board, (0..BOARD_SIZE).map(|column| Position::at(row, column)), piece)
}

fn check_column(board: &Board, column: usize, piece: Cell) -> bool {
    check_positions(board, (0..BOARD_SIZE).map(|row| Position::at(row, column)), piece)
}

/// Cells `(i, i)`.
fn check_main_diagonal(board: &Board, piece: Cell) -> bool {
    check_positions(board, (0..BOARD_SIZE).map(|i| Position::at(i, i)), piece)
}

/// Cells `(i, N - 1 - i)`.
fn check_anti_diagonal(board: &Board, piece: Cell) -> bool {
    check_positions(
        board,
        (0..BOARD_SIZE).map(|i| Position::at(i, BOARD_SIZE - 1 - i)),
        piece,
    )
}
