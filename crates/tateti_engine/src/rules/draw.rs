//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use super::win::winner;
use crate::Board;

/// A full board with no winning line.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_board_not_draw() {
        let board = Board::from_symbols(["X", "O", "X", "", "", "", "", "", ""]);
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = Board::from_symbols(["X", "O", "X", "O", "X", "X", "O", "X", "O"]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = Board::from_symbols(["X", "X", "X", "O", "O", "X", "O", "X", "O"]);
        assert!(!is_draw(&board));
    }
}
