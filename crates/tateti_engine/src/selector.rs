//! Computer opponent: a fixed three-rule heuristic.
//!
//! Rules are tried in order and the first one that applies decides:
//!
//! 1. Block: a line holding two of the player's marks and one empty square
//!    gets that square. Lines are scanned in [`LINES`] order and the first hit
//!    wins. The computer's own two-in-a-row is not looked for.
//! 2. Center: if more than one square is empty and the center is one of them.
//! 3. Random: any empty square, uniformly.
//!
//! No lookahead, no fork detection. It rarely loses, but it can.

use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

use crate::board::CENTER;
use crate::rules::LINES;
use crate::{Board, Mark, MoveError, Square};

/// Source of the computer's moves.
pub trait MoveSelector {
    /// Mark this selector plays.
    fn mark(&self) -> Mark;

    /// Chooses the next cell to play on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::NoLegalMove`] when the board is full.
    fn select_move(&mut self, board: &Board) -> Result<usize, MoveError>;
}

/// The block / center / random heuristic.
#[derive(Debug, Clone)]
pub struct HeuristicSelector<R = ThreadRng> {
    computer: Mark,
    player: Mark,
    rng: R,
}

impl HeuristicSelector<ThreadRng> {
    /// Creates a selector backed by the thread-local random source.
    pub fn new(computer: Mark, player: Mark) -> Self {
        Self::with_rng(computer, player, rand::thread_rng())
    }
}

impl Default for HeuristicSelector<ThreadRng> {
    fn default() -> Self {
        Self::new(Mark::COMPUTER, Mark::PLAYER)
    }
}

impl<R: Rng> HeuristicSelector<R> {
    /// Creates a selector with an explicit random source.
    pub fn with_rng(computer: Mark, player: Mark, rng: R) -> Self {
        debug_assert_ne!(computer, player, "selector needs two distinct marks");
        Self {
            computer,
            player,
            rng,
        }
    }
}

impl<R: Rng> MoveSelector for HeuristicSelector<R> {
    fn mark(&self) -> Mark {
        self.computer
    }

    fn select_move(&mut self, board: &Board) -> Result<usize, MoveError> {
        select_move(board, self.computer, self.player, &mut self.rng)
    }
}

/// Picks the computer's next cell.
///
/// # Errors
///
/// Returns [`MoveError::NoLegalMove`] when the board is full.
#[instrument(skip(board, rng))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    computer: Mark,
    player: Mark,
    rng: &mut R,
) -> Result<usize, MoveError> {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return Err(MoveError::NoLegalMove);
    }

    if let Some(index) = blocking_cell(board, player) {
        debug!(index, "Blocking player line");
        return Ok(index);
    }

    if empty.len() > 1 && board.is_empty(CENTER) {
        debug!(index = CENTER, "Taking center");
        return Ok(CENTER);
    }

    let index = *empty.choose(rng).ok_or(MoveError::NoLegalMove)?;
    debug!(index, candidates = empty.len(), "Random fallback");
    Ok(index)
}

/// Empty square completing the first line that holds two `player` marks.
pub fn blocking_cell(board: &Board, player: Mark) -> Option<usize> {
    let squares = board.squares();
    let mine = Square::Occupied(player);
    LINES.iter().find_map(|&[a, b, c]| {
        if squares[a] == mine && squares[b] == mine && squares[c] == Square::Empty {
            Some(c)
        } else if squares[a] == mine && squares[c] == mine && squares[b] == Square::Empty {
            Some(b)
        } else if squares[b] == mine && squares[c] == mine && squares[a] == Square::Empty {
            Some(a)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pick(board: &Board) -> Result<usize, MoveError> {
        let mut rng = StdRng::seed_from_u64(7);
        select_move(board, Mark::O, Mark::X, &mut rng)
    }

    #[test]
    fn test_blocks_top_row() {
        let board = Board::from_symbols(["X", "X", "", "", "", "", "", "", ""]);
        assert_eq!(pick(&board), Ok(2));
    }

    #[test]
    fn test_blocks_gap_in_middle() {
        let board = Board::from_symbols(["X", "", "X", "", "O", "", "", "", ""]);
        assert_eq!(pick(&board), Ok(1));
    }

    #[test]
    fn test_blocks_leading_gap() {
        let board = Board::from_symbols(["", "O", "", "", "X", "", "", "", "X"]);
        assert_eq!(pick(&board), Ok(0));
    }

    #[test]
    fn test_first_threat_in_line_order_wins() {
        // Column [1,4,7] and diagonal [2,4,6] both threaten; the column comes first.
        let board = Board::from_symbols(["O", "X", "", "", "X", "", "X", "", "O"]);
        assert_eq!(blocking_cell(&board, Mark::X), Some(7));

        // Row [3,4,5] comes before column [1,4,7].
        let board = Board::from_symbols(["O", "X", "", "X", "X", "", "", "", "O"]);
        assert_eq!(pick(&board), Ok(5));
    }

    #[test]
    fn test_block_beats_own_win() {
        // O could complete the top row at 2, but X threatens 7 and blocking comes first.
        let board = Board::from_symbols(["O", "O", "", "", "X", "", "X", "", "X"]);
        assert_eq!(pick(&board), Ok(7));
    }

    #[test]
    fn test_takes_center_after_corner() {
        let board = Board::from_symbols(["X", "", "", "", "", "", "", "", ""]);
        assert_eq!(pick(&board), Ok(4));
    }

    #[test]
    fn test_random_fallback_picks_empty_cell() {
        let board = Board::from_symbols(["X", "", "", "", "O", "", "", "", ""]);
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let index = select_move(&board, Mark::O, Mark::X, &mut rng).unwrap();
            assert!(board.is_empty(index), "seed {seed} picked occupied {index}");
        }
    }

    #[test]
    fn test_last_empty_center_is_played() {
        let board = Board::from_symbols(["X", "O", "X", "X", "", "O", "O", "X", "O"]);
        assert_eq!(pick(&board), Ok(4));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_symbols(["X", "O", "X", "X", "O", "O", "O", "X", "X"]);
        assert_eq!(pick(&board), Err(MoveError::NoLegalMove));
    }

    #[test]
    fn test_selector_trait_uses_its_marks() {
        let mut selector = HeuristicSelector::with_rng(Mark::O, Mark::X, StdRng::seed_from_u64(1));
        assert_eq!(selector.mark(), Mark::O);
        let board = Board::from_symbols(["", "", "", "", "", "", "X", "", "X"]);
        assert_eq!(selector.select_move(&board), Ok(7));
    }
}
