//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. There is
//! no auto-repeat machinery here: a puzzle cursor only needs discrete key
//! presses.

pub mod map;

pub use tui_lightsout_types as types;

pub use map::{handle_key_event, should_quit};
