//! Game session controller: turn order, timing and status for one game at a
//! time.
//!
//! The engine does not know whose turn it is. This controller does: every
//! accepted human move is followed by exactly one computer move unless the
//! human's move ended the game.

use std::time::Duration;

use derive_getters::Getters;
use derive_new::new;
use tateti_engine::{Board, HeuristicSelector, Mark, MoveError, MoveSelector, Outcome, evaluate};
use tracing::{debug, info, instrument, warn};

use crate::clock::SessionClock;

/// Status shown after `start`.
pub const STARTED_MESSAGE: &str = "Your move. You play X.";

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Getters, new)]
pub struct GameEnd {
    /// Final outcome, never `InProgress`.
    outcome: Outcome,
    /// The computer's last move, if it made one this turn.
    reply: Option<usize>,
    /// Time from start to the final move.
    elapsed: Duration,
}

/// What happened when the human selected a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Turn {
    /// Game inactive or cell occupied; nothing changed.
    Ignored,
    /// Both moves were made and the game goes on.
    Continued {
        /// Cell the computer played.
        reply: usize,
    },
    /// The game ended this turn.
    Finished(GameEnd),
}

/// One game against the computer.
#[derive(Debug)]
pub struct GameSession<S = HeuristicSelector> {
    board: Board,
    selector: S,
    clock: SessionClock,
    active: bool,
    outcome: Outcome,
    status: String,
}

impl<S: MoveSelector> GameSession<S> {
    /// Creates an inactive session with an empty board.
    pub fn new(selector: S) -> Self {
        Self {
            board: Board::new(),
            selector,
            clock: SessionClock::default(),
            active: false,
            outcome: Outcome::InProgress,
            status: String::new(),
        }
    }

    /// Mark played by the human.
    pub fn player_mark(&self) -> Mark {
        self.selector.mark().opponent()
    }

    /// Activates the game and starts the clock.
    ///
    /// Returns `false` if the game was already running. A finished board is
    /// cleared before the new game starts.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> bool {
        if self.active {
            debug!("Start ignored, game already running");
            return false;
        }
        if self.outcome.is_over() {
            self.board.reset();
            self.outcome = Outcome::InProgress;
        }
        self.active = true;
        self.clock.start();
        self.status = STARTED_MESSAGE.to_string();
        info!("Game started");
        true
    }

    /// Stops the game, clears the board, the clock and the status.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.active = false;
        self.clock.reset();
        self.board.reset();
        self.outcome = Outcome::InProgress;
        self.status.clear();
        info!("Game restarted");
    }

    /// Plays the human's move at `index`, then the computer's reply.
    ///
    /// Moves while inactive or on an occupied cell are ignored.
    ///
    /// # Errors
    ///
    /// `OutOfRange` for an index outside 0-8. `NoLegalMove` only if the
    /// selector is asked to move on a full board, which evaluation prevents.
    #[instrument(skip(self), fields(active = self.active))]
    pub fn play(&mut self, index: usize) -> Result<Turn, MoveError> {
        if !self.active {
            debug!("Move ignored, game not active");
            return Ok(Turn::Ignored);
        }

        match self.board.set_cell(index, self.player_mark()) {
            Ok(()) => {}
            Err(MoveError::CellOccupied(_)) => return Ok(Turn::Ignored),
            Err(e) => return Err(e),
        }
        if let Some(end) = self.conclude(None) {
            return Ok(Turn::Finished(end));
        }

        let reply = self.selector.select_move(&self.board)?;
        self.board.set_cell(reply, self.selector.mark())?;
        debug_assert!(self.turns_balanced(), "turn alternation broken");
        debug!(reply, "Computer moved");

        match self.conclude(Some(reply)) {
            Some(end) => Ok(Turn::Finished(end)),
            None => Ok(Turn::Continued { reply }),
        }
    }

    /// Evaluates the board and, if the game is over, stops everything.
    fn conclude(&mut self, reply: Option<usize>) -> Option<GameEnd> {
        let outcome = evaluate(&self.board);
        if !outcome.is_over() {
            return None;
        }
        self.active = false;
        self.outcome = outcome;
        self.status = outcome.message().to_string();
        let elapsed = self.clock.stop();
        info!(?outcome, elapsed_secs = elapsed.as_secs_f64(), "Game over");
        Some(GameEnd::new(outcome, reply, elapsed))
    }

    /// The human moves first, so X is never behind O and never more than one ahead.
    fn turns_balanced(&self) -> bool {
        let player = self.board.count(self.player_mark());
        let computer = self.board.count(self.selector.mark());
        let valid = computer <= player && player <= computer + 1;
        if !valid {
            warn!(player, computer, "Mark counts out of balance");
        }
        valid
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// True while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Outcome of the current or last game.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Status message for the UI.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Running time, or the final time once the game ended.
    pub fn elapsed(&self) -> Duration {
        self.clock.elapsed()
    }
}
