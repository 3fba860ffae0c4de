//! Game engine for N x N tic-tac-toe.

use super::action::{Move, MoveError};
use super::invariants::{EngineInvariants, InvariantSet};
use super::observer::GameObserver;
use super::position::{OutOfRange, Position};
use super::rules;
use super::types::{Board, Cell, Outcome, Player};
use tracing::{debug, error, info, instrument, warn};

/// Tic-tac-toe engine: the authoritative board, turn and move counter for
/// one round at a time.
///
/// The engine owns its board exclusively and reports what happens to zero
/// or one [`GameObserver`].
#[derive(Debug)]
pub struct GameEngine<const N: usize> {
    pub(super) board: Board<N>,
    pub(super) turn: Player,
    pub(super) move_count: usize,
    pub(super) status: Outcome,
    pub(super) history: Vec<Move<N>>,
    observer: Option<Box<dyn GameObserver>>,
}

impl<const N: usize> GameEngine<N> {
    /// Creates an engine with an empty board and no observer.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::FIRST,
            move_count: 0,
            status: Outcome::Continuing,
            history: Vec::with_capacity(N * N),
            observer: None,
        }
    }

    /// Creates an engine that reports to `observer`.
    pub fn with_observer(observer: impl GameObserver + 'static) -> Self {
        let mut engine = Self::new();
        engine.observer = Some(Box::new(observer));
        engine
    }

    /// Registers `observer`, returning the one it replaces.
    pub fn set_observer(
        &mut self,
        observer: impl GameObserver + 'static,
    ) -> Option<Box<dyn GameObserver>> {
        self.observer.replace(Box::new(observer))
    }

    /// Unregisters the current observer.
    pub fn take_observer(&mut self) -> Option<Box<dyn GameObserver>> {
        self.observer.take()
    }

    /// Clears the board for a new round.
    ///
    /// Every cell becomes empty, the move counter drops to 0 and the first
    /// player is to move again.
    #[instrument(skip(self), fields(move_count = self.move_count))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.move_count = 0;
        self.status = Outcome::Continuing;
        self.history.clear();
        info!("Board cleared");
        self.notify(|o| o.board_cleared());

        if self.turn != Player::FIRST {
            self.turn = Player::FIRST;
            self.notify(|o| o.turn_changed(Player::FIRST));
        }
    }

    /// Places a mark for the current player.
    pub fn play(&mut self, position: Position<N>) -> Result<Outcome, MoveError<N>> {
        self.apply_move(Move::new(self.turn, position))
    }

    /// Applies a move and evaluates the round.
    ///
    /// On error nothing changes: the board, counter and turn stay as they
    /// were, so the same player can try again.
    ///
    /// # Errors
    ///
    /// - [`MoveError::SquareOccupied`] if the cell is taken, whatever the
    ///   round status or player; observers also receive `invalid_move`.
    /// - [`MoveError::GameOver`] if the round has already finished.
    /// - [`MoveError::WrongPlayer`] if `action.player` is not to move.
    #[instrument(skip(self), fields(turn = ?self.turn, move_count = self.move_count))]
    pub fn apply_move(&mut self, action: Move<N>) -> Result<Outcome, MoveError<N>> {
        let pos = action.position;
        if !self.board.is_empty(pos) {
            warn!(%pos, "Cell already occupied");
            self.notify(|o| o.invalid_move(pos.row(), pos.column()));
            return Err(MoveError::SquareOccupied(pos));
        }

        if self.status.is_terminal() {
            warn!(status = ?self.status, "Move after round ended");
            return Err(MoveError::GameOver);
        }

        if action.player != self.turn {
            warn!(player = ?action.player, "Move out of turn");
            return Err(MoveError::WrongPlayer(action.player));
        }

        self.board.set(pos, Cell::Occupied(action.player));
        self.move_count += 1;
        self.history.push(action);
        debug!(%action, "Move applied");

        let outcome = rules::evaluate(&self.board, pos, self.move_count);
        self.status = outcome;

        match outcome {
            Outcome::Continuing => {
                self.turn = self.turn.opponent();
                let turn = self.turn;
                self.notify(|o| o.turn_changed(turn));
            }
            Outcome::Won(winner) => {
                info!(?winner, moves = self.move_count, "Round won");
                self.notify(|o| o.game_finished(Some(winner)));
            }
            Outcome::Draw => {
                info!(moves = self.move_count, "Round drawn");
                self.notify(|o| o.game_finished(None));
            }
        }

        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(&*self)
        {
            error!(?violations, "Engine invariant violated");
            panic!("Engine invariant violated: {:?}", violations);
        }

        Ok(outcome)
    }

    /// Looks up a cell by raw indices.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfRange`] if either index is outside the board.
    pub fn current_cell(&self, row: usize, column: usize) -> Result<Cell, OutOfRange> {
        Ok(self.board.get(Position::new(row, column)?))
    }

    /// Returns the board.
    pub fn board(&self) -> &Board<N> {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the number of moves made this round.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the outcome of the latest move.
    pub fn status(&self) -> Outcome {
        self.status
    }

    /// Returns this round's moves in order.
    pub fn history(&self) -> &[Move<N>] {
        &self.history
    }

    /// Returns empty cells, or nothing once the round is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position<N>> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    fn notify(&mut self, f: impl FnOnce(&mut dyn GameObserver)) {
        if let Some(observer) = self.observer.as_deref_mut() {
            f(observer);
        }
    }
}

impl<const N: usize> Default for GameEngine<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::super::observer::{EventLog, GameEvent};
    use super::*;

    fn pos(row: usize, column: usize) -> Position<3> {
        Position::new(row, column).unwrap()
    }

    #[test]
    fn test_first_move() {
        let mut game = GameEngine::<3>::new();
        assert_eq!(game.play(pos(1, 1)), Ok(Outcome::Continuing));
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.move_count(), 1);
        assert_eq!(game.current_cell(1, 1), Ok(Cell::Occupied(Player::O)));
    }

    #[test]
    fn test_occupied_cell_notifies() {
        let log = EventLog::new();
        let mut game = GameEngine::<3>::with_observer(log.clone());
        game.play(pos(0, 0)).unwrap();
        log.take();

        assert_eq!(game.play(pos(0, 0)), Err(MoveError::SquareOccupied(pos(0, 0))));
        assert_eq!(log.take(), vec![GameEvent::InvalidMove { row: 0, column: 0 }]);
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn test_occupied_cell_wins_over_other_rejections() {
        let log = EventLog::new();
        let mut game = GameEngine::<3>::with_observer(log.clone());
        game.play(pos(0, 0)).unwrap();
        log.take();

        // O is not to move, but the taken cell is what gets reported.
        let action = Move::new(Player::O, pos(0, 0));
        assert_eq!(
            game.apply_move(action),
            Err(MoveError::SquareOccupied(pos(0, 0)))
        );
        assert_eq!(log.take(), vec![GameEvent::InvalidMove { row: 0, column: 0 }]);

        // An empty cell still gets the turn check.
        let action = Move::new(Player::O, pos(2, 2));
        assert_eq!(game.apply_move(action), Err(MoveError::WrongPlayer(Player::O)));
        assert!(log.take().is_empty());
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "Engine invariant violated")]
    fn test_corrupted_counter_panics_in_debug() {
        let mut game = GameEngine::<3>::new();
        game.play(pos(0, 0)).unwrap();
        game.move_count = 5;
        let _ = game.play(pos(1, 1));
    }

    #[test]
    fn test_reset_restores_first_player() {
        let log = EventLog::new();
        let mut game = GameEngine::<3>::with_observer(log.clone());
        game.play(pos(0, 0)).unwrap();
        log.take();

        game.reset();
        assert_eq!(
            log.take(),
            vec![GameEvent::BoardCleared, GameEvent::TurnChanged(Player::O)]
        );
        assert_eq!(game.turn(), Player::O);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_valid_moves_shrink() {
        let mut game = GameEngine::<3>::new();
        assert_eq!(game.valid_moves().len(), 9);
        game.play(pos(2, 0)).unwrap();
        assert_eq!(game.valid_moves().len(), 8);
        assert!(!game.valid_moves().contains(&pos(2, 0)));
    }

    #[test]
    fn test_observer_swap() {
        let first = EventLog::new();
        let second = EventLog::new();
        let mut game = GameEngine::<3>::with_observer(first.clone());
        assert!(game.set_observer(second.clone()).is_some());

        game.reset();
        assert!(first.events().is_empty());
        assert_eq!(second.events(), vec![GameEvent::BoardCleared]);

        assert!(game.take_observer().is_some());
        game.reset();
        assert_eq!(second.events().len(), 1);
    }
}
