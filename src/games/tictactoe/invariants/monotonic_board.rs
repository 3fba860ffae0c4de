//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameEngine};
use super::Invariant;

/// Invariant: Board cells are monotonic within a round.
///
/// Replaying the move history onto an empty board must reproduce the
/// current board, with every move landing on an empty cell.
pub struct MonotonicBoardInvariant;

impl<const N: usize> Invariant<GameEngine<N>> for MonotonicBoardInvariant {
    fn holds(game: &GameEngine<N>) -> bool {
        let mut reconstructed = Board::<N>::new();

        for mov in game.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, Cell::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_empty_game_holds() {
        let game = GameEngine::<3>::new();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameEngine::<3>::new();
        game.play(Position::new(1, 1).unwrap()).unwrap();
        game.play(Position::new(2, 0).unwrap()).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameEngine::<3>::new();
        let center = Position::new(1, 1).unwrap();
        game.play(center).unwrap();
        game.board.set(center, Cell::Occupied(Player::X));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
