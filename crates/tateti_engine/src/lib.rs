//! Tic-tac-toe engine for a single player against the computer.
//!
//! # Architecture
//!
//! - **Board**: nine squares with checked reads and writes
//! - **Rules**: win, draw and [`Outcome`] evaluation
//! - **Selector**: the computer's block / center / random heuristic
//!
//! Turn order is not tracked here. Whoever drives the game decides which mark
//! goes next.
//!
//! # Example
//!
//! ```
//! use tateti_engine::{Board, Mark, Outcome, evaluate, select_move};
//!
//! let mut board = Board::new();
//! board.set_cell(0, Mark::PLAYER)?;
//! assert_eq!(evaluate(&board), Outcome::InProgress);
//!
//! let reply = select_move(&board, Mark::COMPUTER, Mark::PLAYER, &mut rand::thread_rng())?;
//! assert_eq!(reply, 4);
//! # Ok::<(), tateti_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod position;
pub mod rules;
mod selector;
mod types;

pub use board::{Board, CELLS, CENTER};
pub use error::MoveError;
pub use position::Position;
pub use rules::{LINES, Line, Outcome, evaluate, is_draw, winner};
pub use selector::{HeuristicSelector, MoveSelector, blocking_cell, select_move};
pub use types::{Mark, Square};
