//! Command-line interface for tateti.

use std::path::PathBuf;

use clap::Parser;

/// Tateti - timed tic-tac-toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tateti")]
#[command(about = "Beat the computer at tic-tac-toe as fast as you can", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, default_value = "tateti.toml")]
    pub config: PathBuf,

    /// Leaderboard file (overrides the config)
    #[arg(long)]
    pub leaderboard: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tateti"]);
        assert_eq!(cli.config, PathBuf::from("tateti.toml"));
        assert!(cli.leaderboard.is_none());
    }

    #[test]
    fn test_leaderboard_override() {
        let cli = Cli::parse_from(["tateti", "--leaderboard", "scores.json", "-c", "my.toml"]);
        assert_eq!(cli.leaderboard, Some(PathBuf::from("scores.json")));
        assert_eq!(cli.config, PathBuf::from("my.toml"));
    }
}
