//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::super::{GameEngine, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show O, X, O, X, ... starting with [`Player::FIRST`].
/// While the round continues, the player to move is the one after the
/// last mover; once it ends, the turn stays with the last mover.
pub struct AlternatingTurnInvariant;

impl<const N: usize> Invariant<GameEngine<N>> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine<N>) -> bool {
        let history = game.history();

        let Some(first) = history.first() else {
            return game.turn() == Player::FIRST;
        };

        if first.player != Player::FIRST {
            return false;
        }

        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        let last_mover = history[history.len() - 1].player;
        if game.status().is_terminal() {
            game.turn() == last_mover
        } else {
            game.turn() == last_mover.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (O, X, O, X, ...)"
    }
}
