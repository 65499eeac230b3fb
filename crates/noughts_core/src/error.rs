//! Error types for board access and move application.

use derive_more::{Display, Error, From};

/// Error raised by the board for a rejected read or write.
///
/// The board is never modified when one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Row or column outside `0..=2`.
    #[display("Position ({}, {}) is out of range", row, col)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({}, {}) is already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

/// Error that can occur when applying a move to a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The board rejected the move; the round is unchanged.
    #[display("Invalid move: {}", _0)]
    InvalidMove(#[error(source)] BoardError),

    /// The round already reached a win or a draw.
    #[display("Game is already over")]
    #[from(skip)]
    GameOver,
}

impl MoveError {
    /// Returns the board-level reason for an invalid move.
    pub fn reason(&self) -> Option<BoardError> {
        match self {
            MoveError::InvalidMove(reason) => Some(*reason),
            MoveError::GameOver => None,
        }
    }
}
