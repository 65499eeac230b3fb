//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::board::Board;
use crate::engine::GameEngine;

/// Invariant: the board is exactly the history replayed onto an empty board.
///
/// Each recorded move must land on an empty cell, so a mark can never have
/// been overwritten.
pub struct MonotonicBoardInvariant;

impl Invariant<GameEngine> for MonotonicBoardInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let mut reconstructed = Board::new();

        for mov in engine.history() {
            if reconstructed.set(mov.row, mov.col, mov.player).is_err() {
                return false;
            }
        }

        reconstructed == *engine.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Move;
    use crate::types::Player;

    #[test]
    fn test_new_round_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_moves_hold() {
        let engine = GameEngine::replay(&[(0, 0), (1, 1), (0, 2), (2, 0)]).unwrap();
        assert!(MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut engine = GameEngine::replay(&[(1, 1)]).unwrap();
        engine.history.push(Move::new(Player::O, 1, 1));
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }

    #[test]
    fn test_unrecorded_mark_violates() {
        let mut engine = GameEngine::new();
        engine.board.set(2, 2, Player::X).unwrap();
        assert!(!MonotonicBoardInvariant::holds(&engine));
    }
}
