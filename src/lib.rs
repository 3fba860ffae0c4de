//! nxn_tictactoe - N x N tic-tac-toe with session scoring
//!
//! # Architecture
//!
//! - **Games**: board, rules and engine for one round at a time
//! - **Session**: win/draw tallies across rounds and the coordinator that
//!   feeds tile selections into the engine
//! - **Config**: display and logging settings for the terminal frontend
//!
//! # Example
//!
//! ```
//! use nxn_tictactoe::{EventLog, GameEvent, GameSession, Outcome, Player};
//!
//! let log = EventLog::new();
//! let mut session = GameSession::<3>::with_observer(log.clone());
//! session.start_round();
//!
//! assert_eq!(session.select_tile(1, 1), Ok(Outcome::Continuing));
//! assert_eq!(session.engine().turn(), Player::X);
//! assert!(log.events().contains(&GameEvent::TurnChanged(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Session tracking
pub use session::{GameSession, ScoreKey, SelectError, SessionScore};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Cell, EventLog, GameEngine, GameEvent, GameObserver, Move, MoveError, OutOfRange,
    Outcome, Player, Position, TILE_SIZE, invariants, rules,
};
