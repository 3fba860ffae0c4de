//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

/// Checks if `move_count` moves have filled an N x N board.
///
/// A full board with no winner indicates a draw. Counting moves avoids
/// scanning the grid after every move.
#[instrument]
pub fn is_full<const N: usize>(move_count: usize) -> bool {
    move_count == N * N
}
