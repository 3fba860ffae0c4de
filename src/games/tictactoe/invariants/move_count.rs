//! Move count invariant: the counter matches the board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: The move counter equals both the number of occupied cells
/// and the length of the round's history.
pub struct MoveCountInvariant;

impl<const N: usize> Invariant<GameEngine<N>> for MoveCountInvariant {
    fn holds(game: &GameEngine<N>) -> bool {
        let count = game.move_count();
        count <= N * N && count == game.board().occupied() && count == game.history().len()
    }

    fn description() -> &'static str {
        "Move counter matches occupied cells and history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_counts_agree() {
        let mut game = GameEngine::<4>::new();
        assert!(MoveCountInvariant::holds(&game));
        game.play(Position::new(3, 3).unwrap()).unwrap();
        assert!(MoveCountInvariant::holds(&game));
    }

    #[test]
    fn test_drifted_counter_violates() {
        let mut game = GameEngine::<4>::new();
        game.play(Position::new(3, 3).unwrap()).unwrap();
        game.move_count = 0;
        assert!(!MoveCountInvariant::holds(&game));
    }
}
