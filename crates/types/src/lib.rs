//! Shared types for the Lights Out game.
//!
//! Pure data structures with no external dependencies, usable from any
//! context (core logic, input mapping, terminal rendering).
//!
//! # Game configuration
//!
//! A game is described by [`GridConfig`]:
//!
//! - `rows` / `cols`: grid dimensions, fixed for the lifetime of a game
//! - `light_chance`: probability in `[0, 1]` that a cell starts lit
//!
//! The defaults (3x3, 0.7) match the original browser game.
//!
//! # Example
//!
//! ```
//! use tui_lightsout_types::{Coord, GridConfig};
//!
//! let config = GridConfig::default();
//! assert_eq!((config.rows, config.cols), (3, 3));
//!
//! let origin = Coord::new(0, 0);
//! assert_eq!(origin.row, 0);
//! ```

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 3;

/// Default number of grid columns.
pub const DEFAULT_COLS: usize = 3;

/// Default chance that any cell is lit at the start of a game.
pub const DEFAULT_LIGHT_CHANCE: f64 = 0.7;

/// Game configuration: grid dimensions and the initial lit probability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    /// Probability in `[0, 1]` that a cell is lit at the start of a game.
    pub light_chance: f64,
}

impl GridConfig {
    pub fn new(rows: usize, cols: usize, light_chance: f64) -> Self {
        Self {
            rows,
            cols,
            light_chance,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            light_chance: DEFAULT_LIGHT_CHANCE,
        }
    }
}

/// Zero-based cell address, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Derived game outcome.
///
/// `Won` is terminal. The grid itself never locks; the session layer stops
/// forwarding toggles once this is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Won,
}

impl GameOutcome {
    pub fn is_won(&self) -> bool {
        matches!(self, GameOutcome::Won)
    }
}

/// Actions the presentation layer can apply to a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    /// Flip the cell under the cursor and its orthogonal neighbors.
    Toggle,
    /// Abandon the board and deal a fresh one.
    Restart,
}
