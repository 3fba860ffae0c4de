//! Command-line interface for nxn_tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// N x N tic-tac-toe for two players sharing one terminal
#[derive(Parser, Debug)]
#[command(name = "nxn_tictactoe")]
#[command(about = "Two-player N x N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (player names, log file)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write trace output here instead of the configured log file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Print the session score as JSON on exit
    #[arg(long)]
    pub summary_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["nxn_tictactoe"]);
        assert!(cli.config.is_none());
        assert!(!cli.summary_json);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "nxn_tictactoe",
            "-c",
            "game.toml",
            "--log-file",
            "out.log",
            "--summary-json",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("game.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("out.log")));
        assert!(cli.summary_json);
    }
}
