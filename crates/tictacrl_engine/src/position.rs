//! Validated coordinates on the 3x3 grid.

use crate::board::BOARD_SIZE;
use crate::error::{InvalidPositionError, ParsePositionError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A (row, column) cell coordinate, always inside the grid.
///
/// Construction is the only place bounds are checked; every `Position`
/// that exists is valid, so board access never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    row: usize,
    column: usize,
}

/// Unvalidated wire form, checked through `TryFrom` on deserialize.
#[derive(Deserialize)]
struct RawPosition {
    row: i64,
    column: i64,
}

impl Position {
    /// Creates a position, failing if either coordinate is outside `[0, 3)`.
    #[instrument]
    pub fn new(row: i64, column: i64) -> Result<Self, InvalidPositionError> {
        Self::checked(row.into(), column.into())
    }

    fn checked(row: i128, column: i128) -> Result<Self, InvalidPositionError> {
        let size = BOARD_SIZE as i128;
        if !(0..size).contains(&row) || !(0..size).contains(&column) {
            return Err(InvalidPositionError { row, column });
        }
        Ok(Self {
            row: row as usize,
            column: column as usize,
        })
    }

    /// Internal constructor for coordinates already known to be in range.
    pub(crate) fn at(row: usize, column: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && column < BOARD_SIZE);
        Self { row, column }
    }

    /// Position for a row-major index in `0..9`.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < BOARD_SIZE * BOARD_SIZE).then(|| Self::at(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// All nine positions in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE * BOARD_SIZE).map(|index| Self::at(index / BOARD_SIZE, index % BOARD_SIZE))
    }

    /// Row index, `0..3`.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index, `0..3`.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Row-major index, `0..9`.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIZE + self.column
    }
}

impl TryFrom<RawPosition> for Position {
    type Error = InvalidPositionError;

    fn try_from(raw: RawPosition) -> Result<Self, Self::Error> {
        Position::new(raw.row, raw.column)
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = InvalidPositionError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        // usize is at most 64 bits, so the widening is lossless.
        Position::checked(row as i128, column as i128)
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `"row,column"` or `"row column"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ParsePositionError::Malformed(s.to_string());

        let parts: Vec<&str> = if s.contains(',') {
            s.split(',').map(str::trim).collect()
        } else {
            s.split_whitespace().collect()
        };

        let [row, column] = parts.as_slice() else {
            return Err(malformed());
        };
        let row: i64 = row.parse().map_err(|_| malformed())?;
        let column: i64 = column.parse().map_err(|_| malformed())?;

        Ok(Position::new(row, column)?)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
