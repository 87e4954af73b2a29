//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Contents of one board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Cell {
    /// Cell holds an X piece.
    X,
    /// Cell holds an O piece.
    O,
    /// Cell is unoccupied.
    Empty,
}

impl Cell {
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::X => 'X',
            Cell::O => 'O',
            Cell::Empty => '_',
        }
    }

    /// Returns true for `X` and `O`.
    pub fn is_piece(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// Player entitled to the next move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Turn {
    /// Player X (moves first).
    PlayerX,
    /// Player O.
    PlayerO,
}

impl Turn {
    /// The piece this player places.
    pub fn piece(self) -> Cell {
        match self {
            Turn::PlayerX => Cell::X,
            Turn::PlayerO => Cell::O,
        }
    }

    /// Returns the opponent.
    pub fn other(self) -> Self {
        match self {
            Turn::PlayerX => Turn::PlayerO,
            Turn::PlayerO => Turn::PlayerX,
        }
    }
}

/// Classification of a game: still running, won, or drawn.
///
/// `NotOver` is the only non-terminal state. Every other state is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameState {
    /// Moves can still be made.
    #[strum(to_string = "Game in progress")]
    NotOver,
    /// X completed a line.
    #[strum(to_string = "Player X wins")]
    WinPlayerX,
    /// O completed a line.
    #[strum(to_string = "Player O wins")]
    WinPlayerO,
    /// Board filled with no winner.
    #[strum(to_string = "Draw")]
    Draw,
}

impl GameState {
    /// Terminal state for a win by `turn`.
    pub fn win_for(turn: Turn) -> Self {
        match turn {
            Turn::PlayerX => GameState::WinPlayerX,
            Turn::PlayerO => GameState::WinPlayerO,
        }
    }

    /// Returns true for every state except `NotOver`.
    pub fn is_over(self) -> bool {
        self != GameState::NotOver
    }

    /// The winning player, if any.
    pub fn winner(self) -> Option<Turn> {
        match self {
            GameState::WinPlayerX => Some(Turn::PlayerX),
            GameState::WinPlayerO => Some(Turn::PlayerO),
            GameState::NotOver | GameState::Draw => None,
        }
    }
}
