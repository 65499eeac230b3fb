//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Board**: fixed 3x3 grid with row, column and diagonal accessors
//! - **Rules**: win and draw predicates over a board
//! - **Engine**: turn state machine that owns one round's board
//! - **Invariants**: properties the engine asserts after every move
//!
//! Nothing here performs I/O; a driver obtains coordinates from wherever it
//! likes and feeds them to [`GameEngine::apply_move`].
//!
//! # Example
//!
//! ```
//! use noughts_core::{create_round, GameStatus, Player};
//!
//! let mut round = create_round();
//! for (row, col) in [(0, 0), (0, 1), (1, 1), (1, 0)] {
//!     round.apply_move(row, col).unwrap();
//! }
//! assert_eq!(round.apply_move(2, 2), Ok(GameStatus::Won(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod engine;
mod error;
pub mod invariants;
pub mod rules;
mod types;

pub use action::Move;
pub use board::{Board, Diagonal, SIZE, Snapshot};
pub use engine::GameEngine;
pub use error::{BoardError, MoveError};
pub use types::{Cell, GameStatus, Player};

/// Starts a new round: a fresh engine owning a fresh, empty board.
///
/// The board is reachable through [`GameEngine::board`]. Rounds share no
/// state, so restarting is just calling this again.
pub fn create_round() -> GameEngine {
    GameEngine::new()
}
