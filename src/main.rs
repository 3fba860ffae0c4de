//! nxn_tictactoe - terminal frontend
//!
//! Two players share one keyboard; scores accumulate until quit.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use nxn_tictactoe::AppConfig;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_file(path)?,
        None => AppConfig::default(),
    };
    if let Some(log_file) = cli.log_file.clone() {
        config = config.with_log_file(log_file);
    }

    initialize_tracing(&config)?;
    run(config, cli.summary_json)
}

/// Sends trace output to the log file so it stays off the game screen.
fn initialize_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(())
}

/// Plays until quit, then prints the session summary.
#[instrument(skip(config))]
fn run(config: AppConfig, summary_json: bool) -> Result<()> {
    info!("Starting nxn_tictactoe");

    let score = tui::run_tui(config)?;
    info!(rounds = score.rounds_played(), "Session finished");

    if summary_json {
        let json = serde_json::to_string_pretty(&score).context("Failed to serialize score")?;
        println!("{}", json);
    } else {
        println!("Rounds played: {}", score.rounds_played());
        println!("{}", score);
    }

    Ok(())
}
