//! Error types for the tic-tac-toe engine.

use crate::position::Position;
use crate::types::Cell;
use derive_more::{Display, Error, From};

/// A row or column outside the 3x3 grid.
///
/// Coordinates are widened to `i128` so both signed and `usize` input is
/// reported exactly as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid board position ({}, {})", row, column)]
pub struct InvalidPositionError {
    /// Requested row.
    pub row: i128,
    /// Requested column.
    pub column: i128,
}

/// Attempt to place a non-piece value on the board.
///
/// A correctly driven [`Game`](crate::Game) never produces this; seeing it
/// means the caller of [`Board::set_piece`](crate::Board::set_piece) broke
/// its contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Can only place an X piece or an O piece, got {:?}", piece)]
pub struct IllegalPieceError {
    /// The rejected cell value.
    pub piece: Cell,
}

/// Errors returned by [`Game::make_move`](crate::Game::make_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The target cell already holds a piece.
    #[display("Illegal move: there is already a piece at {}", _0)]
    IllegalMove(#[error(not(source))] Position),

    /// The board refused the piece.
    #[display("{}", _0)]
    #[from]
    IllegalPiece(IllegalPieceError),
}

/// Errors from parsing a textual coordinate such as `"1,2"`.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum ParsePositionError {
    /// Input is not two integers separated by a comma or whitespace.
    #[display("Expected \"row,column\", got {:?}", _0)]
    Malformed(#[error(not(source))] String),

    /// Input parsed but lies outside the grid.
    #[display("{}", _0)]
    #[from]
    OutOfRange(InvalidPositionError),
}
