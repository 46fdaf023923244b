//! Lights Out for the terminal (workspace facade crate).
//!
//! This package keeps a stable `tui_lightsout::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_lightsout_core as core;
pub use tui_lightsout_input as input;
pub use tui_lightsout_term as term;
pub use tui_lightsout_types as types;
