//! Application state and logic.

use crossterm::event::KeyCode;
use nxn_tictactoe::{
    AppConfig, GameEvent, GameSession, MoveError, Player, Position, SelectError, SessionScore,
};
use std::sync::mpsc::{self, Receiver};
use tracing::{debug, warn};

use super::input::move_cursor;

/// Main application state.
pub struct App<const N: usize> {
    session: GameSession<N>,
    events: Receiver<GameEvent>,
    config: AppConfig,
    cursor: Position<N>,
    status_message: String,
    round_opening: bool,
    should_quit: bool,
}

impl<const N: usize> App<N> {
    /// Creates the application and opens the first round.
    pub fn new(config: AppConfig) -> Self {
        let (tx, events) = mpsc::channel();
        let mut app = Self {
            session: GameSession::with_observer(tx),
            events,
            config,
            cursor: Position::center(),
            status_message: String::new(),
            round_opening: false,
            should_quit: false,
        };
        app.session.start_round();
        app.drain_events();
        app
    }

    /// Gets the session being played.
    pub fn session(&self) -> &GameSession<N> {
        &self.session
    }

    /// Gets the highlighted tile.
    pub fn cursor(&self) -> Position<N> {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the display settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns true once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Consumes the app, keeping the score for the exit summary.
    pub fn into_score(self) -> SessionScore {
        self.session.score().clone()
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                debug!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.next_round(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn select(&mut self) {
        let (row, column) = (self.cursor.row(), self.cursor.column());
        match self.session.select_tile(row, column) {
            Ok(outcome) => debug!(?outcome, "Tile selected"),
            // The engine already reported this through `invalid_move`.
            Err(SelectError::Move(MoveError::SquareOccupied(_))) => {}
            Err(SelectError::Move(MoveError::GameOver)) => {
                self.status_message = "Round over! Press 'r' for a new round.".to_string();
            }
            Err(e) => {
                warn!(error = %e, "Tile selection failed");
                self.status_message = format!("Move error: {}", e);
            }
        }
        self.drain_events();
    }

    fn next_round(&mut self) {
        if !self.session.engine().status().is_terminal() {
            debug!("Ignoring restart while round in progress");
            return;
        }
        self.session.start_round();
        self.cursor = Position::center();
        self.drain_events();
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_event(event);
        }
        self.round_opening = false;
    }

    /// Updates the status line from an engine notification.
    fn handle_event(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        self.status_message = match event {
            // A reset may follow the clear with the first player's turn.
            GameEvent::TurnChanged(player) if self.round_opening => self.round_banner(player),
            GameEvent::TurnChanged(player) => format!("{}'s turn", self.config.name_of(player)),
            GameEvent::GameFinished(Some(player)) => format!(
                "{} wins! Press 'r' for a new round.",
                self.config.name_of(player)
            ),
            GameEvent::GameFinished(None) => "Draw! Press 'r' for a new round.".to_string(),
            GameEvent::BoardCleared => self.round_banner(self.session.engine().turn()),
            GameEvent::InvalidMove { .. } => "Tile already taken".to_string(),
        };
        self.round_opening = matches!(event, GameEvent::BoardCleared);
    }

    fn round_banner(&self, player: Player) -> String {
        format!(
            "Round {} - {}'s turn",
            self.session.score().current_round(),
            self.config.name_of(player)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nxn_tictactoe::{Cell, ScoreKey};

    fn play(app: &mut App<3>, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_starts_on_round_one() {
        let app = App::<3>::new(AppConfig::default());
        assert_eq!(app.status_message(), "Round 1 - Player O's turn");
        assert_eq!(app.cursor(), Position::new(1, 1).unwrap());
    }

    #[test]
    fn test_select_marks_cursor_tile() {
        let mut app = App::<3>::new(AppConfig::default());
        play(&mut app, &[KeyCode::Up, KeyCode::Enter]);
        assert_eq!(
            app.session().engine().current_cell(0, 1),
            Ok(Cell::Occupied(Player::O))
        );
        assert_eq!(app.status_message(), "Player X's turn");
    }

    #[test]
    fn test_taken_tile() {
        let mut app = App::<3>::new(AppConfig::default());
        play(&mut app, &[KeyCode::Enter, KeyCode::Enter]);
        assert_eq!(app.status_message(), "Tile already taken");
        assert_eq!(app.session().engine().turn(), Player::X);
    }

    #[test]
    fn test_win_then_next_round() {
        let mut app = App::<3>::new(AppConfig::default());
        // O: (1,1) (0,1) (2,1) down the middle column; X: (1,0) (0,0).
        play(
            &mut app,
            &[
                KeyCode::Enter,
                KeyCode::Left,
                KeyCode::Enter,
                KeyCode::Right,
                KeyCode::Up,
                KeyCode::Enter,
                KeyCode::Left,
                KeyCode::Enter,
                KeyCode::Right,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.status_message(), "Player O wins! Press 'r' for a new round.");
        assert_eq!(app.session().score().win_count(ScoreKey::PlayerO), 1);

        play(&mut app, &[KeyCode::Right, KeyCode::Enter]);
        assert_eq!(app.status_message(), "Round over! Press 'r' for a new round.");

        play(&mut app, &[KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.status_message(), "Tile already taken");

        play(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.status_message(), "Round 2 - Player O's turn");
        assert_eq!(app.session().engine().move_count(), 0);
    }

    #[test]
    fn test_next_round_banner_after_second_player_wins() {
        let mut app = App::<3>::new(AppConfig::default());
        // O: (1,1) (1,0) (2,2); X takes the top row, finishing at (0,2).
        play(
            &mut app,
            &[
                KeyCode::Enter,
                KeyCode::Up,
                KeyCode::Left,
                KeyCode::Enter,
                KeyCode::Down,
                KeyCode::Enter,
                KeyCode::Up,
                KeyCode::Right,
                KeyCode::Enter,
                KeyCode::Down,
                KeyCode::Down,
                KeyCode::Right,
                KeyCode::Enter,
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.status_message(), "Player X wins! Press 'r' for a new round.");
        assert_eq!(app.session().score().win_count(ScoreKey::PlayerX), 1);

        play(&mut app, &[KeyCode::Char('r')]);
        assert_eq!(app.session().engine().turn(), Player::O);
        assert_eq!(app.status_message(), "Round 2 - Player O's turn");

        play(&mut app, &[KeyCode::Enter]);
        assert_eq!(app.status_message(), "Player X's turn");
    }

    #[test]
    fn test_restart_ignored_mid_round() {
        let mut app = App::<3>::new(AppConfig::default());
        play(&mut app, &[KeyCode::Enter, KeyCode::Char('r')]);
        assert_eq!(app.session().engine().move_count(), 1);
    }

    #[test]
    fn test_quit() {
        let mut app = App::<3>::new(AppConfig::default());
        assert!(!app.should_quit());
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_custom_names() {
        let config = AppConfig::from_toml("player_o_name = \"Terry\"").unwrap();
        let app = App::<3>::new(config);
        assert_eq!(app.status_message(), "Round 1 - Terry's turn");
    }
}
