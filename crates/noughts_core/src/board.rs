//! Fixed 3x3 board storage.

use crate::error::BoardError;
use crate::types::{Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows and columns.
pub const SIZE: usize = 3;

/// Read-only copy of the grid, one inner array per row.
pub type Snapshot = [[Cell; SIZE]; SIZE];

/// One of the two diagonals of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Diagonal {
    /// Top-left to bottom-right, cells where `row == col`.
    Main,
    /// Top-right to bottom-left, cells where `row + col == 2`.
    Anti,
}

/// 3x3 tic-tac-toe board.
///
/// Cells only ever go from [`Cell::Empty`] to [`Cell::Occupied`]; the board
/// refuses to overwrite a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order.
    cells: [Cell; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; SIZE * SIZE],
        }
    }

    fn index(row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= SIZE || col >= SIZE {
            return Err(BoardError::OutOfRange { row, col });
        }
        Ok(row * SIZE + col)
    }

    /// Gets the cell at the given position.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        Self::index(row, col).map(|i| self.cells[i])
    }

    /// Places the player's mark at the given position.
    ///
    /// Either the cell is written or nothing changes.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), BoardError> {
        let i = Self::index(row, col)?;
        if !self.cells[i].is_empty() {
            return Err(BoardError::CellOccupied { row, col });
        }
        self.cells[i] = Cell::Occupied(player);
        Ok(())
    }

    /// Returns true when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Returns the cells of row `i`, left to right.
    pub fn row(&self, i: usize) -> Result<[Cell; SIZE], BoardError> {
        if i >= SIZE {
            return Err(BoardError::OutOfRange { row: i, col: 0 });
        }
        Ok(std::array::from_fn(|col| self.cells[i * SIZE + col]))
    }

    /// Returns the cells of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> Result<[Cell; SIZE], BoardError> {
        if j >= SIZE {
            return Err(BoardError::OutOfRange { row: 0, col: j });
        }
        Ok(std::array::from_fn(|row| self.cells[row * SIZE + j]))
    }

    /// Returns the cells of a diagonal, top row first.
    pub fn diagonal(&self, which: Diagonal) -> [Cell; SIZE] {
        std::array::from_fn(|row| match which {
            Diagonal::Main => self.cells[row * SIZE + row],
            Diagonal::Anti => self.cells[row * SIZE + (SIZE - 1 - row)],
        })
    }

    /// Returns a copy of the grid for rendering.
    pub fn snapshot(&self) -> Snapshot {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cells[row * SIZE + col]))
    }

    /// Iterates over the coordinates of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| (i / SIZE, i % SIZE))
    }

    /// Counts the marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
