//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The engine calls them after
//! every accepted move; they never mutate anything.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{completes_line, winner};
