//! N x N tic-tac-toe: board, rules and engine.

mod action;
mod game;
pub mod invariants;
mod observer;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameEngine;
pub use observer::{EventLog, GameEvent, GameObserver};
pub use position::{OutOfRange, Position};
pub use types::{Board, Cell, Outcome, Player, TILE_SIZE};
