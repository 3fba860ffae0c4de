//! Terminal frontend: draws the tiles and turns key presses into moves.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use nxn_tictactoe::{AppConfig, SessionScore, TILE_SIZE};
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

use app::App;

/// Runs the game until the user quits, returning the session score.
#[instrument(skip_all)]
pub fn run_tui(config: AppConfig) -> Result<SessionScore> {
    info!(tile_size = TILE_SIZE, "Starting terminal UI");

    let mut terminal = ratatui::try_init().context("Failed to set up terminal")?;
    let app = App::<TILE_SIZE>::new(config);
    let res = run_loop(&mut terminal, app);
    ratatui::restore();

    match res {
        Ok(app) => {
            info!("Terminal UI closed");
            Ok(app.into_score())
        }
        Err(err) => {
            error!(error = ?err, "Game loop error");
            Err(err)
        }
    }
}

fn run_loop<const N: usize>(terminal: &mut DefaultTerminal, mut app: App<N>) -> Result<App<N>> {
    while !app.should_quit() {
        terminal
            .draw(|frame| ui::draw(frame, &app))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(app)
}
