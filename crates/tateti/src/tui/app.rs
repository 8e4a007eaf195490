//! Application state and key handling.

use crossterm::event::{KeyCode, KeyEvent};
use tateti_engine::{HeuristicSelector, MoveSelector, Outcome, Position};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;
use crate::clock::format_elapsed;
use crate::leaderboard::{JsonFileStore, Leaderboard, ScoreEntry, ScoreStore, record_score};
use crate::session::{GameEnd, GameSession, Turn};

/// Longest name accepted at the prompt.
pub const MAX_NAME_LEN: usize = 24;

/// What the keyboard currently drives.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Board input.
    Playing,
    /// Name prompt after a win.
    NameEntry {
        /// Text typed so far.
        name: String,
        /// Winning time to record.
        elapsed_seconds: f64,
    },
}

/// Main application state.
pub struct App<S = HeuristicSelector, T = JsonFileStore> {
    session: GameSession<S>,
    store: T,
    leaderboard: Leaderboard,
    cursor: Position,
    mode: Mode,
    clock_label: String,
    should_quit: bool,
}

impl<S: MoveSelector, T: ScoreStore> App<S, T> {
    /// Creates the app, loading the stored leaderboard.
    ///
    /// An unreadable leaderboard is logged and replaced by an empty one.
    #[instrument(skip_all)]
    pub fn new(session: GameSession<S>, store: T) -> Self {
        let leaderboard = store.load().unwrap_or_else(|e| {
            warn!(error = %e, "Could not load leaderboard, starting empty");
            Leaderboard::default()
        });
        info!(entries = leaderboard.len(), "App ready");
        Self {
            session,
            store,
            leaderboard,
            cursor: Position::default(),
            mode: Mode::Playing,
            clock_label: format_elapsed(0.0),
            should_quit: false,
        }
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.mode {
            Mode::Playing => self.handle_board_key(key.code),
            Mode::NameEntry { .. } => self.handle_name_key(key.code),
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                if self.session.start() {
                    self.clock_label = format_elapsed(0.0);
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor),
            KeyCode::Char(c) => {
                if let Some(pos) = Position::from_digit(c) {
                    self.cursor = pos;
                    self.play(pos);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter => self.submit_name(),
            KeyCode::Esc => {
                info!("Name prompt cancelled, score not recorded");
                self.mode = Mode::Playing;
            }
            _ => {
                if let Mode::NameEntry { name, .. } = &mut self.mode {
                    match code {
                        KeyCode::Backspace => {
                            name.pop();
                        }
                        KeyCode::Char(c)
                            if !c.is_control() && name.chars().count() < MAX_NAME_LEN =>
                        {
                            name.push(c);
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn play(&mut self, pos: Position) {
        match self.session.play(pos.to_index()) {
            Ok(Turn::Finished(end)) => self.finish(end),
            Ok(Turn::Continued { reply }) => debug!(reply, "Turn complete"),
            Ok(Turn::Ignored) => {}
            Err(e) => warn!(error = %e, "Move rejected"),
        }
    }

    fn finish(&mut self, end: GameEnd) {
        let seconds = end.elapsed().as_secs_f64();
        self.clock_label = format_elapsed(seconds);
        if *end.outcome() == Outcome::PlayerWins {
            self.mode = Mode::NameEntry {
                name: String::new(),
                elapsed_seconds: seconds,
            };
        }
    }

    fn submit_name(&mut self) {
        let Mode::NameEntry {
            name,
            elapsed_seconds,
        } = std::mem::replace(&mut self.mode, Mode::Playing)
        else {
            return;
        };
        let name = name.trim();
        if name.is_empty() {
            info!("Empty name, score not recorded");
            return;
        }
        match record_score(&self.store, ScoreEntry::new(name, elapsed_seconds)) {
            Ok(board) => self.leaderboard = board,
            Err(e) => {
                warn!(error = %e, "Could not record score, saving shown leaderboard");
                self.leaderboard.insert(ScoreEntry::new(name, elapsed_seconds));
                // Replaces an unreadable file with the entries on screen.
                if let Err(e) = self.store.save(&self.leaderboard) {
                    warn!(error = %e, "Could not save leaderboard");
                }
            }
        }
    }

    fn restart(&mut self) {
        self.session.restart();
        self.mode = Mode::Playing;
        self.clock_label = format_elapsed(0.0);
    }

    /// Refreshes the time label. Ticks only affect the display.
    pub fn on_tick(&mut self) {
        if self.session.is_active() {
            self.clock_label = format_elapsed(self.session.elapsed().as_secs_f64());
        }
    }

    /// The game session.
    pub fn session(&self) -> &GameSession<S> {
        &self.session
    }

    /// Leaderboard as last loaded or saved.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    /// Highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Current input mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Time shown to the user, `MM:SS`.
    pub fn clock_label(&self) -> &str {
        &self.clock_label
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}
