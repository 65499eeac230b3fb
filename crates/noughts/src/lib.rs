//! Terminal driver for two-player tic-tac-toe.
//!
//! The game rules live in [`noughts_core`]; this crate only reads moves,
//! prints boards and asks whether to play again.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod input;
mod render;
mod session;

pub use config::{ConfigError, GameConfig};
pub use input::{InputError, parse_move, wants_restart};
pub use render::render_board;
pub use session::{Session, SessionSummary, replay_moves};
