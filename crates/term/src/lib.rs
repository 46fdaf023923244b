//! Terminal rendering module.
//!
//! Renders the game into a simple framebuffer that is flushed to a crossterm
//! backend. [`GameView`] is pure (no I/O) and unit-testable; only
//! [`TerminalRenderer`] touches the real terminal.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_lightsout_core as core;
pub use tui_lightsout_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_full_into, TerminalRenderer};
