//! Errors raised by the board and the move selector.

/// Error that can occur when reading, writing or choosing a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is outside 0-8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The selector was asked to move on a full board.
    #[display("No legal move left on a full board")]
    NoLegalMove,
}

impl std::error::Error for MoveError {}
