//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::{Board, Mark, Square};

/// Three cell indices that win when uniformly marked.
pub type Line = [usize; 3];

/// The 8 winning lines in evaluation order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first line (in [`LINES`] order) whose three
/// squares share it.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    let squares = board.squares();
    LINES.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(mark) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some(mark)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut board = Board::new();
            for i in line {
                board.set_cell(i, Mark::O).unwrap();
            }
            assert_eq!(winner(&board), Some(Mark::O), "line {line:?}");
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_symbols(["X", "X", "", "", "", "", "", "", ""]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_decides() {
        // Not reachable by alternating play, but order must still be stable.
        let board = Board::from_symbols(["O", "O", "O", "X", "X", "X", "", "", ""]);
        assert_eq!(winner(&board), Some(Mark::O));
    }
}
