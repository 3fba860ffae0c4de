//! Session scoring and round coordination.

use crate::games::tictactoe::{
    GameEngine, GameObserver, MoveError, OutOfRange, Outcome, Player, Position,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{error, info, instrument};

/// Key under which a finished round is counted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum ScoreKey {
    /// Rounds won by O.
    #[strum(to_string = "Player O")]
    PlayerO,
    /// Rounds won by X.
    #[strum(to_string = "Player X")]
    PlayerX,
    /// Rounds nobody won.
    #[strum(to_string = "Draw")]
    Draw,
}

impl From<Player> for ScoreKey {
    fn from(player: Player) -> Self {
        match player {
            Player::O => ScoreKey::PlayerO,
            Player::X => ScoreKey::PlayerX,
        }
    }
}

impl From<Option<Player>> for ScoreKey {
    fn from(winner: Option<Player>) -> Self {
        winner.map_or(ScoreKey::Draw, ScoreKey::from)
    }
}

/// Win and draw tallies for every round played since launch.
///
/// Lives in memory only; nothing is written to storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    wins: HashMap<ScoreKey, u32>,
    rounds_played: u32,
}

impl SessionScore {
    /// Creates an empty score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a finished round. `None` records a draw.
    #[instrument(skip(self))]
    pub fn record_result(&mut self, winner: Option<Player>) {
        let key = ScoreKey::from(winner);
        *self.wins.entry(key).or_insert(0) += 1;
        self.rounds_played += 1;
        info!(%key, rounds_played = self.rounds_played, "Round recorded");
    }

    /// Rounds counted under `key`, zero if never recorded.
    pub fn win_count(&self, key: impl Into<ScoreKey>) -> u32 {
        self.wins.get(&key.into()).copied().unwrap_or(0)
    }

    /// Rounds finished so far.
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// One-based number of the round being played.
    pub fn current_round(&self) -> u32 {
        self.rounds_played + 1
    }

    /// Every key with its count, in display order.
    pub fn tallies(&self) -> Vec<(ScoreKey, u32)> {
        <ScoreKey as strum::IntoEnumIterator>::iter()
            .map(|key| (key, self.win_count(key)))
            .collect()
    }
}

impl std::fmt::Display for SessionScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lines = self
            .tallies()
            .into_iter()
            .map(|(key, count)| format!("{}: {}", key, count))
            .collect::<Vec<_>>();
        write!(f, "{}", lines.join("\n"))
    }
}

/// Error from selecting a tile by raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SelectError<const N: usize> {
    /// Input mapping produced indices outside the board.
    #[display("{}", _0)]
    OutOfRange(OutOfRange),
    /// The engine rejected the move.
    #[display("{}", _0)]
    Move(MoveError<N>),
}

impl<const N: usize> std::error::Error for SelectError<N> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SelectError::OutOfRange(e) => Some(e),
            SelectError::Move(e) => Some(e),
        }
    }
}

/// Top-level coordinator: one engine for the current round plus the score
/// that outlives it.
#[derive(Debug, Default)]
pub struct GameSession<const N: usize> {
    engine: GameEngine<N>,
    score: SessionScore,
}

impl<const N: usize> GameSession<N> {
    /// Creates a session with no observer.
    #[instrument]
    pub fn new() -> Self {
        Self {
            engine: GameEngine::new(),
            score: SessionScore::new(),
        }
    }

    /// Creates a session whose engine reports to `observer`.
    pub fn with_observer(observer: impl GameObserver + 'static) -> Self {
        Self {
            engine: GameEngine::with_observer(observer),
            score: SessionScore::new(),
        }
    }

    /// Clears the board for the next round.
    #[instrument(skip(self), fields(round = self.score.current_round()))]
    pub fn start_round(&mut self) {
        info!("Starting round");
        self.engine.reset();
    }

    /// Plays the current turn on the tile at `(row, column)`.
    ///
    /// A winning or drawing move is counted in the score before this
    /// returns.
    ///
    /// # Errors
    ///
    /// - [`SelectError::OutOfRange`] if the indices miss the board. The
    ///   caller's input mapping is broken; nothing changes.
    /// - [`SelectError::Move`] if the engine rejects the move.
    #[instrument(skip(self))]
    pub fn select_tile(&mut self, row: usize, column: usize) -> Result<Outcome, SelectError<N>> {
        let position = Position::new(row, column).inspect_err(|e| {
            error!(error = %e, "Tile mapping produced an invalid position");
        })?;

        let outcome = self.engine.play(position)?;
        if outcome.is_terminal() {
            self.score.record_result(outcome.winner());
        }
        Ok(outcome)
    }

    /// Returns the engine for the current round.
    pub fn engine(&self) -> &GameEngine<N> {
        &self.engine
    }

    /// Returns the running score.
    pub fn score(&self) -> &SessionScore {
        &self.score
    }
}
