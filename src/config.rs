//! Frontend configuration loaded from TOML.

use crate::games::tictactoe::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Display and logging settings for the terminal frontend.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Name shown for player O.
    #[serde(default = "default_player_o_name")]
    player_o_name: String,

    /// Name shown for player X.
    #[serde(default = "default_player_x_name")]
    player_x_name: String,

    /// File receiving trace output while the UI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,
}

fn default_player_o_name() -> String {
    Player::O.to_string()
}

fn default_player_x_name() -> String {
    Player::X.to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("nxn_tictactoe.log")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_o_name: default_player_o_name(),
            player_x_name: default_player_x_name(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            player_o = %config.player_o_name,
            player_x = %config.player_x_name,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Replaces the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Name shown for `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::O => &self.player_o_name,
            Player::X => &self.player_x_name,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
