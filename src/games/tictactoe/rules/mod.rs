//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board. Rules only look at lines passing through
//! the cell just played, so a move costs O(N) to evaluate rather than a
//! full-board rescan.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LineKind, line_owner, winning_line};

use super::{Board, Outcome, Position};
use tracing::instrument;

/// Evaluates the round after a move at `last`.
///
/// `move_count` is the number of moves made this round, including `last`.
#[instrument(skip(board))]
pub fn evaluate<const N: usize>(board: &Board<N>, last: Position<N>, move_count: usize) -> Outcome {
    if let Some((winner, _)) = winning_line(board, last) {
        Outcome::Won(winner)
    } else if is_full::<N>(move_count) {
        Outcome::Draw
    } else {
        Outcome::Continuing
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Cell, Player};
    use super::*;

    fn pos(row: usize, column: usize) -> Position<3> {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn test_continuing_after_first_move() {
        let mut board = Board::<3>::new();
        board.set(pos(1, 1), Cell::Occupied(Player::O));
        assert_eq!(evaluate(&board, pos(1, 1), 1), Outcome::Continuing);
    }

    #[test]
    fn test_win_beats_full_board() {
        // O O O / X X O / X O X with the last O at (0, 2) fills the board and wins.
        let mut board = Board::<3>::new();
        let layout = [
            [Player::O, Player::O, Player::O],
            [Player::X, Player::X, Player::O],
            [Player::X, Player::O, Player::X],
        ];
        for (r, row) in layout.iter().enumerate() {
            for (c, player) in row.iter().enumerate() {
                board.set(pos(r, c), Cell::Occupied(*player));
            }
        }
        assert_eq!(evaluate(&board, pos(0, 2), 9), Outcome::Won(Player::O));
    }

    #[test]
    fn test_draw_on_full_board() {
        // O X O / O X X / X O O
        let mut board = Board::<3>::new();
        let layout = [
            [Player::O, Player::X, Player::O],
            [Player::O, Player::X, Player::X],
            [Player::X, Player::O, Player::O],
        ];
        for (r, row) in layout.iter().enumerate() {
            for (c, player) in row.iter().enumerate() {
                board.set(pos(r, c), Cell::Occupied(*player));
            }
        }
        assert_eq!(evaluate(&board, pos(2, 2), 9), Outcome::Draw);
    }
}
