//! Win detection logic for N x N tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::{debug, instrument};

/// A full line of N cells that can win the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// The row of the played cell.
    Row,
    /// The column of the played cell.
    Column,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl LineKind {
    /// Lines passing through `pos`, in the order they are checked.
    ///
    /// Diagonals only appear when the cell actually sits on them.
    pub fn through<const N: usize>(pos: Position<N>) -> impl Iterator<Item = LineKind> {
        [
            Some(LineKind::Row),
            Some(LineKind::Column),
            pos.on_main_diagonal().then_some(LineKind::MainDiagonal),
            pos.on_anti_diagonal().then_some(LineKind::AntiDiagonal),
        ]
        .into_iter()
        .flatten()
    }

    /// Coordinates of the i-th cell of this line through `pos`.
    fn cell<const N: usize>(self, pos: Position<N>, i: usize) -> (usize, usize) {
        match self {
            LineKind::Row => (pos.row(), i),
            LineKind::Column => (i, pos.column()),
            LineKind::MainDiagonal => (i, i),
            LineKind::AntiDiagonal => (i, N - 1 - i),
        }
    }
}

/// Returns the player owning every cell of `line` through `pos`.
///
/// Stops at the first cell that breaks the line.
pub fn line_owner<const N: usize>(
    board: &Board<N>,
    pos: Position<N>,
    line: LineKind,
) -> Option<Player> {
    let rows = board.rows();
    let (r0, c0) = line.cell(pos, 0);
    let Cell::Occupied(candidate) = rows[r0][c0] else {
        return None;
    };

    (1..N)
        .all(|i| {
            let (r, c) = line.cell(pos, i);
            rows[r][c] == Cell::Occupied(candidate)
        })
        .then_some(candidate)
}

/// Checks the lines through the last played cell for a winner.
///
/// Returns the winner and the first line (row, column, main diagonal,
/// anti-diagonal) that completed.
#[instrument(skip(board))]
pub fn winning_line<const N: usize>(
    board: &Board<N>,
    last: Position<N>,
) -> Option<(Player, LineKind)> {
    LineKind::through(last).find_map(|line| {
        let owner = line_owner(board, last, line)?;
        debug!(?owner, ?line, "Line completed");
        Some((owner, line))
    })
}
