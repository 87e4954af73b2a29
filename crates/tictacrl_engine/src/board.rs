//! The 3x3 board.

use crate::error::IllegalPieceError;
use crate::position::Position;
use crate::types::Cell;
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 3;

const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 3x3 tic-tac-toe board.
///
/// Cells live in one flat array in row-major order (`row * 3 + column`), so
/// every cell has its own storage and writing one never touches another.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Writes `piece` at `position`, replacing whatever was there.
    ///
    /// Occupancy is not checked here; that is the game's job.
    ///
    /// # Errors
    ///
    /// Returns [`IllegalPieceError`] if `piece` is [`Cell::Empty`].
    #[instrument(skip(self))]
    pub fn set_piece(&mut self, position: Position, piece: Cell) -> Result<(), IllegalPieceError> {
        if !piece.is_piece() {
            return Err(IllegalPieceError { piece });
        }
        self.cells[position.index()] = piece;
        Ok(())
    }

    /// Returns the contents of the cell at `position`.
    pub fn check_cell_piece(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    /// Clears the cell at `position` and returns what it held.
    #[instrument(skip(self))]
    pub fn remove_piece(&mut self, position: Position) -> Cell {
        let previous = std::mem::replace(&mut self.cells[position.index()], Cell::Empty);
        trace!(?previous, "Cell cleared");
        previous
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_piece())
    }

    /// Empty cells in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all()
            .filter(|pos| self.check_cell_piece(*pos) == Cell::Empty)
            .collect()
    }

    /// Number of cells holding `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Renders a leading newline, then one line per row using `X`, `O` and `_`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        for row in self.cells.chunks(BOARD_SIZE) {
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
