//! Tateti - play tic-tac-toe against the computer in the terminal.

use anyhow::Result;
use clap::Parser;
use tateti::{AppConfig, Cli, init_tracing, run_tui};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)?;
    if let Some(path) = cli.leaderboard {
        config = config.with_leaderboard_path(path);
    }

    init_tracing(&config)?;
    info!(config_path = %cli.config.display(), "Starting tateti");

    run_tui(&config)
}
