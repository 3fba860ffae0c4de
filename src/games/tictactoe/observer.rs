//! Notifications the engine sends to its collaborator.
//!
//! Calls are synchronous and happen inside the operation that triggers
//! them, so an observer always sees events in the order they occurred.

use super::Player;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::mpsc::Sender;
use tracing::debug;

/// Receiver of engine notifications.
///
/// Override the four callbacks individually, or only [`on_event`] to see
/// every notification as a [`GameEvent`].
///
/// [`on_event`]: GameObserver::on_event
pub trait GameObserver: std::fmt::Debug {
    /// Catch-all the default callbacks forward to.
    fn on_event(&mut self, _event: GameEvent) {}

    /// The active player changed.
    fn turn_changed(&mut self, turn: Player) {
        self.on_event(GameEvent::TurnChanged(turn));
    }

    /// The round ended. `None` signals a draw.
    fn game_finished(&mut self, winner: Option<Player>) {
        self.on_event(GameEvent::GameFinished(winner));
    }

    /// Every cell was cleared for a new round.
    fn board_cleared(&mut self) {
        self.on_event(GameEvent::BoardCleared);
    }

    /// A move targeted a cell that is already taken.
    fn invalid_move(&mut self, row: usize, column: usize) {
        self.on_event(GameEvent::InvalidMove { row, column });
    }
}

/// A single notification, as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// See [`GameObserver::turn_changed`].
    TurnChanged(Player),
    /// See [`GameObserver::game_finished`].
    GameFinished(Option<Player>),
    /// See [`GameObserver::board_cleared`].
    BoardCleared,
    /// See [`GameObserver::invalid_move`].
    InvalidMove {
        /// Row of the rejected cell.
        row: usize,
        /// Column of the rejected cell.
        column: usize,
    },
}

impl GameObserver for Sender<GameEvent> {
    fn on_event(&mut self, event: GameEvent) {
        if self.send(event).is_err() {
            debug!(?event, "Event receiver dropped");
        }
    }
}

/// Records events in memory. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Rc<RefCell<Vec<GameEvent>>>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of every event recorded so far.
    pub fn events(&self) -> Vec<GameEvent> {
        self.events.borrow().clone()
    }

    /// Removes and returns every event recorded so far.
    pub fn take(&self) -> Vec<GameEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: GameEvent) {
        self.events.borrow_mut().push(event);
    }
}
