//! Turn state machine for a single round.

use crate::action::Move;
use crate::board::Board;
use crate::error::MoveError;
use crate::rules::completes_line;
use crate::types::{GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board of one round and is the only thing that advances it.
/// States are `InProgress(player)`, `Won(player)` and `Draw`; the round starts
/// as `InProgress(X)` and the last two are terminal.
#[derive(Debug, Clone)]
pub struct GameEngine {
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

impl GameEngine {
    /// Creates a new round with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            status: GameStatus::InProgress(Player::X),
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `(row, col)` and advances the round.
    ///
    /// A move that completes a line wins even if it also fills the board.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the round already ended.
    /// - [`MoveError::InvalidMove`] if the board rejects the cell; the round is
    ///   unchanged and the same player is still to move.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<GameStatus, MoveError> {
        let GameStatus::InProgress(player) = self.status else {
            warn!("Move attempted after round ended");
            return Err(MoveError::GameOver);
        };

        if let Err(reason) = self.board.set(row, col, player) {
            warn!(%reason, "Move rejected");
            return Err(MoveError::InvalidMove(reason));
        }
        self.history.push(Move::new(player, row, col));

        self.status = if completes_line(&self.board, row, col, player) {
            info!(%player, "Round won");
            GameStatus::Won(player)
        } else if self.board.is_full() {
            info!("Round drawn");
            GameStatus::Draw
        } else {
            GameStatus::InProgress(player.opponent())
        };
        debug!(status = ?self.status, "Move applied");

        #[cfg(debug_assertions)]
        self.assert_invariants();

        Ok(self.status)
    }

    /// Replays moves into a fresh round, stopping at the first rejected move.
    #[instrument]
    pub fn replay(moves: &[(usize, usize)]) -> Result<Self, MoveError> {
        let mut engine = Self::new();
        for &(row, col) in moves {
            engine.apply_move(row, col)?;
        }
        Ok(engine)
    }

    /// Returns the round status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the player to move, or `None` once the round is over.
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            GameStatus::InProgress(player) => Some(player),
            GameStatus::Won(_) | GameStatus::Draw => None,
        }
    }

    /// Returns true once the round is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{InvariantSet, RoundInvariants};

        if let Err(violations) = RoundInvariants::check_all(self) {
            for v in &violations {
                warn!(description = %v.description, "Invariant violated");
            }
            debug_assert!(violations.is_empty(), "Round invariants violated");
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
