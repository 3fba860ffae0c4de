//! Range-checked board coordinates.

use super::types::Board;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{error, instrument};

/// Raw indices that fall outside the board.
///
/// Input mapping should never produce these; seeing one means the caller
/// and the board disagree about the grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Position ({}, {}) is outside the {}x{} board", row, column, size, size)]
pub struct OutOfRange {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub column: usize,
    /// Tiles per side of the board.
    pub size: usize,
}

/// A cell coordinate on an N x N board, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position<const N: usize> {
    row: usize,
    column: usize,
}

impl<const N: usize> Position<N> {
    /// Creates a position, rejecting indices outside the board.
    #[instrument]
    pub fn new(row: usize, column: usize) -> Result<Self, OutOfRange> {
        if row >= N || column >= N {
            error!(row, column, size = N, "Index outside the board");
            return Err(OutOfRange {
                row,
                column,
                size: N,
            });
        }
        Ok(Self { row, column })
    }

    /// The middle cell (rounded towards the top-left on even boards).
    pub fn center() -> Self {
        const { assert!(N > 0, "board needs at least one tile per side") };
        Self {
            row: N / 2,
            column: N / 2,
        }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index.
    pub fn column(self) -> usize {
        self.column
    }

    /// Creates position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < N * N).then_some(Self {
            row: index / N,
            column: index % N,
        })
    }

    /// Checks whether this cell lies on the top-left to bottom-right diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.row == self.column
    }

    /// Checks whether this cell lies on the top-right to bottom-left diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.row + self.column == N - 1
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N * N).filter_map(Self::from_index)
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board<N>) -> Vec<Self> {
        Self::all().filter(|pos| board.is_empty(*pos)).collect()
    }
}

impl<const N: usize> std::fmt::Display for Position<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
