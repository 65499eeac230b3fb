//! Draw detection for tic-tac-toe.

use super::win::winner;
use crate::board::Board;
use tracing::instrument;

/// Checks if the board is full with no line for either player.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn fill(rows: [[Player; 3]; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, player) in row.iter().enumerate() {
                board.set(r, c, *player).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        // X O X / O X X / O X O
        let board = fill([[X, O, X], [O, X, X], [O, X, O]]);
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        use Player::{O, X};
        // X X X / O O X / X O O
        let board = fill([[X, X, X], [O, O, X], [X, O, O]]);
        assert!(board.is_full());
        assert!(!is_draw(&board));
    }
}
