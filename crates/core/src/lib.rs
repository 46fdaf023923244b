//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole Lights Out rule set and the interactive
//! session state. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces the same starting board
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: usable from a TUI, a GUI, or headless simulation
//!
//! # Module Structure
//!
//! - [`grid`]: the boolean board, the plus-shaped toggle rule, and the win
//!   condition ("every cell unlit")
//! - [`game_state`]: cursor-driven session layer with move counting and
//!   restart
//! - [`rng`]: small seeded LCG used to deal starting boards
//!
//! # Example
//!
//! ```
//! use tui_lightsout_core::GameState;
//! use tui_lightsout_core::types::{GameAction, GridConfig};
//!
//! // Every cell starts lit, so the first toggle always counts.
//! let config = GridConfig::new(3, 3, 1.0);
//! let mut game = GameState::new(config, 12345).unwrap();
//!
//! game.apply_action(GameAction::CursorRight).unwrap();
//! game.apply_action(GameAction::Toggle).unwrap();
//! assert_eq!(game.moves(), 1);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;

pub use tui_lightsout_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::{Grid, GridError};
pub use rng::SimpleRng;
