//! Win detection anchored at the last move.

use crate::board::{Board, Diagonal, SIZE};
use crate::types::{Cell, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

fn all_marked(line: [Cell; SIZE], player: Player) -> bool {
    line.iter().all(|c| *c == Cell::Occupied(player))
}

/// Checks whether `player`, having just played `(row, col)`, owns a full line
/// through that cell.
///
/// Only the row, the column and whichever diagonals pass through the cell are
/// inspected. A corner sits on one diagonal, the center on both, and edge
/// cells on neither.
#[instrument(skip(board))]
pub fn completes_line(board: &Board, row: usize, col: usize, player: Player) -> bool {
    if board.row(row).is_ok_and(|line| all_marked(line, player)) {
        return true;
    }
    if board.column(col).is_ok_and(|line| all_marked(line, player)) {
        return true;
    }
    if row == col && all_marked(board.diagonal(Diagonal::Main), player) {
        return true;
    }
    row + col == SIZE - 1 && all_marked(board.diagonal(Diagonal::Anti), player)
}

/// Scans every line for a winner.
///
/// The engine relies on [`completes_line`]; this full scan serves replays and
/// invariant checks.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| {
        (0..SIZE).any(|i| {
            board.row(i).is_ok_and(|line| all_marked(line, player))
                || board.column(i).is_ok_and(|line| all_marked(line, player))
        }) || Diagonal::iter().any(|d| all_marked(board.diagonal(d), player))
    })
}
