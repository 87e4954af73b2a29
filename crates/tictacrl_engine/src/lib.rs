//! Tic-tac-toe rules engine.
//!
//! Board representation, move legality, turn alternation, and win/draw
//! detection. Everything here is synchronous and free of I/O; a front end
//! renders the [`Game`] and feeds [`Position`]s back into
//! [`Game::make_move`].
//!
//! # Example
//!
//! ```
//! use tictacrl_engine::{Board, Game, GameState, Position};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = Game::new(Board::new());
//! for (row, column) in [(0, 0), (0, 1), (1, 1), (1, 0), (2, 2)] {
//!     game.make_move(Position::new(row, column)?)?;
//! }
//! assert_eq!(game.game_state(), GameState::WinPlayerX);
//! assert_eq!(game.board_configuration().to_string(), "\nXO_\nOX_\n__X\n");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
pub mod invariants;
mod position;
mod rules;
mod types;

pub use board::{BOARD_SIZE, Board};
pub use error::{IllegalPieceError, InvalidPositionError, MoveError, ParsePositionError};
pub use game::Game;
pub use position::Position;
pub use types::{Cell, GameState, Turn};
