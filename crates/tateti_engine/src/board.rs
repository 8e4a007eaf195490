//! The 3x3 board and its cell access rules.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{Mark, MoveError, Position, Square};

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// Index of the center cell.
pub const CENTER: usize = 4;

/// 3x3 tic-tac-toe board.
///
/// The board only stores marks. It knows nothing about turns, winners or
/// timers; callers decide whose mark goes where.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from display symbols (`"X"`, `"O"`, anything else empty).
    pub fn from_symbols(symbols: [&str; CELLS]) -> Self {
        let mut squares = [Square::Empty; CELLS];
        for (square, symbol) in squares.iter_mut().zip(symbols) {
            *square = match symbol {
                "X" => Square::Occupied(Mark::X),
                "O" => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
        }
        Self { squares }
    }

    /// Reads the square at `index`.
    pub fn cell(&self, index: usize) -> Result<Square, MoveError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(MoveError::OutOfRange(index))
    }

    /// Reads the square at a named position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Places `mark` at `index`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `index` is not 0-8, `CellOccupied` if the square already
    /// holds a mark. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn set_cell(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        match self.cell(index)? {
            Square::Empty => {
                self.squares[index] = Square::Occupied(mark);
                Ok(())
            }
            Square::Occupied(_) => {
                debug!(index, "Rejected move on occupied cell");
                Err(MoveError::CellOccupied(index))
            }
        }
    }

    /// Checks if the square at `index` is empty. Out-of-range is not empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cell(index), Ok(Square::Empty))
    }

    /// True when no square is empty.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; CELLS];
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; CELLS] {
        &self.squares
    }

    /// Indices of empty squares, ascending.
    pub fn empty_cells(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, s)| **s == Square::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Formats the board as text; empty squares show their 1-based key.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                match self.squares[pos] {
                    Square::Empty => result.push_str(&(pos + 1).to_string()),
                    Square::Occupied(mark) => result.push_str(mark.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}
