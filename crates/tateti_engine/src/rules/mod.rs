//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates the board, so every
//! check can be repeated after each move without side effects.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, Line, winner};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Mark};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No winner yet and empty squares remain.
    InProgress,
    /// The human completed a line.
    PlayerWins,
    /// The computer completed a line.
    ComputerWins,
    /// Full board, no line.
    Draw,
}

impl Outcome {
    /// True once the game has ended.
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Status message shown to the user.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::InProgress => "",
            Outcome::PlayerWins => "You win!",
            Outcome::ComputerWins => "The computer wins!",
            Outcome::Draw => "The game ended in a draw!",
        }
    }
}

impl From<Mark> for Outcome {
    fn from(winner: Mark) -> Self {
        match winner {
            Mark::X => Outcome::PlayerWins,
            Mark::O => Outcome::ComputerWins,
        }
    }
}

/// Evaluates the board.
///
/// The first uniform line in [`LINES`] order decides the winner. A full board
/// with no such line is a draw.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        mark.into()
    } else if is_draw(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
