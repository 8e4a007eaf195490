//! Terminal UI for tateti.

mod app;
mod input;
mod ui;

pub use app::{App, MAX_NAME_LEN, Mode};
pub use input::move_cursor;
pub use ui::draw;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tateti_engine::{HeuristicSelector, Mark, MoveSelector};
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::clock::{TICK_PERIOD, Ticker};
use crate::leaderboard::{JsonFileStore, ScoreStore};
use crate::{AppConfig, GameSession};

/// Input poll timeout; also bounds how stale the screen can get.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the interactive game until the user quits.
///
/// Must be called inside a tokio runtime (the ticker is a tokio task).
#[instrument(skip_all, fields(leaderboard = %config.leaderboard_path().display()))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tateti TUI");

    let session = GameSession::new(HeuristicSelector::new(Mark::COMPUTER, Mark::PLAYER));
    let store = JsonFileStore::new(config.leaderboard_path().clone());
    let mut app = App::new(session, store);

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Raw mode and alternate screen. Restores the terminal on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on, any early return drops the guard and restores the terminal.
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
    }
}

/// Draw, drain ticks, read one key; repeat.
///
/// A ticker exists exactly while the session is active, so every way a game
/// stops (win, draw, restart, quit) also stops the ticker.
fn run_loop<S: MoveSelector, T: ScoreStore>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<S, T>,
) -> Result<()> {
    let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
    let mut ticker: Option<Ticker> = None;

    loop {
        match (app.session().is_active(), ticker.is_some()) {
            (true, false) => ticker = Some(Ticker::spawn(TICK_PERIOD, tick_tx.clone())),
            (false, true) => ticker = None,
            _ => {}
        }

        while tick_rx.try_recv().is_ok() {
            app.on_tick();
        }

        terminal.draw(|f| draw(f, &*app))?;

        if app.should_quit() {
            debug!("Leaving game loop");
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            app.handle_key(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_restores_without_raw_mode() {
        // Restoring a terminal that never entered raw mode must not panic.
        drop(TerminalGuard);
    }
}
