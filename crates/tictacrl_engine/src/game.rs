//! Turn-taking state machine for tic-tac-toe.

use crate::board::{BOARD_SIZE, Board};
use crate::error::MoveError;
use crate::invariants::assert_invariants;
use crate::position::Position;
use crate::rules;
use crate::types::{Cell, GameState, Turn};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// A single game of tic-tac-toe.
///
/// Owns its board exclusively. X moves first and turns alternate until a
/// move wins or fills the board; after that the game is frozen and
/// [`make_move`](Game::make_move) just reports the final state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Game {
    pub(crate) board: Board,
    turn: Turn,
    game_state: GameState,
    /// X and O counts on the board the game started from.
    #[serde(skip)]
    opening: (usize, usize),
}

impl Game {
    /// Starts a game on `board`, with X to move.
    ///
    /// The board is normally empty. Pieces already on it are kept and
    /// excluded from turn bookkeeping.
    #[instrument]
    pub fn new(board: Board) -> Self {
        if board.count(Cell::Empty) != BOARD_SIZE * BOARD_SIZE {
            warn!(board = %board, "Starting game on a non-empty board");
        }
        let opening = (board.count(Cell::X), board.count(Cell::O));
        Self {
            board,
            turn: Turn::PlayerX,
            game_state: GameState::NotOver,
            opening,
        }
    }

    /// Places the current player's piece at `position`.
    ///
    /// Returns the state after the move. Once the game is over this is a
    /// no-op that returns the final state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::IllegalMove`] if the cell is occupied. The game
    /// is left untouched.
    #[instrument(skip(self), fields(turn = ?self.turn, state = ?self.game_state))]
    pub fn make_move(&mut self, position: Position) -> Result<GameState, MoveError> {
        if self.game_state.is_over() {
            debug!("Game is already over, ignoring move");
            return Ok(self.game_state);
        }

        if self.board.check_cell_piece(position) != Cell::Empty {
            warn!(%position, "Cell is already occupied");
            return Err(MoveError::IllegalMove(position));
        }

        self.board.set_piece(position, self.turn.piece())?;
        self.game_state = rules::evaluate(&self.board, self.turn);

        if self.game_state == GameState::NotOver {
            self.advance_turn();
        } else {
            info!(state = %self.game_state, board = %self.board, "Game over");
        }

        assert_invariants(self);
        Ok(self.game_state)
    }

    /// The current board.
    pub fn board_configuration(&self) -> &Board {
        &self.board
    }

    /// Player to move. After the game ends this is the player who moved last.
    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Current state of the game.
    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    /// Empty cells the current player may choose; none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.game_state.is_over() {
            Vec::new()
        } else {
            self.board.empty_positions()
        }
    }

    /// Pieces of `piece` placed through [`make_move`](Game::make_move).
    pub(crate) fn placed(&self, piece: Cell) -> usize {
        let (opening_x, opening_o) = self.opening;
        let opening = match piece {
            Cell::X => opening_x,
            Cell::O => opening_o,
            Cell::Empty => 0,
        };
        self.board.count(piece).saturating_sub(opening)
    }

    fn advance_turn(&mut self) {
        self.turn = self.turn.other();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Board::new())
    }
}
