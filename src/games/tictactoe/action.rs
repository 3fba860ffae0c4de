//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated before the engine applies them.

use super::{Player, Position};
use serde::Serialize;
use tracing::instrument;

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Move<const N: usize> {
    /// The player making the move.
    pub player: Player,
    /// The cell being claimed.
    pub position: Position<N>,
}

impl<const N: usize> Move<N> {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position<N>) -> Self {
        Self { player, position }
    }
}

impl<const N: usize> std::fmt::Display for Move<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when applying a move.
///
/// None of these change engine state; the same player may simply try again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError<const N: usize> {
    /// The cell at the position is already occupied.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(Position<N>),

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The round already finished; start a new one first.
    #[display("Round is already over")]
    GameOver,
}

impl<const N: usize> std::error::Error for MoveError<N> {}
