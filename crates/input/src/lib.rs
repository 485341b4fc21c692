//! Terminal input module.
//!
//! Maps raw `crossterm` events into [`crate::types::InputEvent`]s. The game
//! is played with the mouse; the keyboard only offers ways to quit, standing
//! in for closing the window.

pub mod map;

pub use tictactoe_types as types;

pub use map::{map_event, should_quit};
