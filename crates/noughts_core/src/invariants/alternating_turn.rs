//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::engine::GameEngine;
use crate::types::{GameStatus, Player};

/// Invariant: players alternate, X first, and the player to move matches the
/// number of moves made.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let history = engine.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match engine.status() {
            GameStatus::InProgress(to_move) => {
                let expected = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                to_move == expected
            }
            GameStatus::Won(winner) => history.last().is_some_and(|m| m.player == winner),
            GameStatus::Draw => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
