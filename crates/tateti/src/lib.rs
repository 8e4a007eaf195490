//! Tateti - timed tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Session**: turn order, game clock and status for one game
//! - **Clock**: `MM:SS` formatting and the one-second display ticker
//! - **Leaderboard**: the ten fastest wins, stored as JSON
//! - **TUI**: ratatui front-end with a name prompt after each win
//!
//! Rules and the computer's heuristic live in [`tateti_engine`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod clock;
mod config;
mod leaderboard;
mod logging;
mod session;
mod tui;

// Crate-level exports - CLI and configuration
pub use cli::Cli;
pub use config::{AppConfig, ConfigError};
pub use logging::init_tracing;

// Crate-level exports - Timing
pub use clock::{SessionClock, TICK_PERIOD, Tick, Ticker, format_elapsed};

// Crate-level exports - Leaderboard
pub use leaderboard::{
    CAPACITY, JsonFileStore, Leaderboard, ScoreEntry, ScoreStore, StoreError, record_score,
};

// Crate-level exports - Session
pub use session::{GameEnd, GameSession, STARTED_MESSAGE, Turn};

// Crate-level exports - Terminal UI
pub use tui::{App, MAX_NAME_LEN, Mode, draw, move_cursor, run_tui};

// Crate-level exports - Engine types
pub use tateti_engine::{Board, HeuristicSelector, Mark, MoveError, MoveSelector, Outcome, Position};
