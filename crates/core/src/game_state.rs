//! Game state module - the interactive session layer
//!
//! Ties the grid to a playable session: a cursor the player moves around
//! (the keyboard stand-in for clicking a cell), a move counter, and restart.
//!
//! The grid itself never locks. Once the outcome is `Won` this layer stops
//! forwarding toggles, matching the original game where the solved board is
//! replaced by a win message and stops taking clicks.

use crate::grid::{Grid, GridError};
use crate::rng::SimpleRng;
use crate::types::{Coord, GameAction, GameOutcome, GridConfig};

/// One game session: a grid plus everything the player interacts through.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    config: GridConfig,
    cursor: Coord,
    rng: SimpleRng,
    seed: u32,
    moves: u32,
}

impl GameState {
    /// Create a session with a board dealt from the given seed.
    pub fn new(config: GridConfig, seed: u32) -> Result<Self, GridError> {
        let mut rng = SimpleRng::new(seed);
        let grid = Grid::random(&config, &mut rng)?;
        Ok(Self {
            grid,
            config,
            cursor: Coord::new(0, 0),
            rng,
            seed,
            moves: 0,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Toggles applied to the current board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Seed this session was created with (for replaying a board).
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Derived outcome of the current board; never stored.
    pub fn outcome(&self) -> GameOutcome {
        self.grid.outcome()
    }

    pub fn won(&self) -> bool {
        self.outcome().is_won()
    }

    /// Apply one session action.
    ///
    /// Cursor movement clamps at the edges. `Toggle` is dropped once the
    /// game is won. `Restart` deals a fresh board from the session's RNG
    /// stream and resets cursor and move counter.
    pub fn apply_action(&mut self, action: GameAction) -> Result<(), GridError> {
        match action {
            GameAction::CursorUp => self.cursor.row = self.cursor.row.saturating_sub(1),
            GameAction::CursorDown => {
                self.cursor.row = (self.cursor.row + 1).min(self.grid.rows() - 1);
            }
            GameAction::CursorLeft => self.cursor.col = self.cursor.col.saturating_sub(1),
            GameAction::CursorRight => {
                self.cursor.col = (self.cursor.col + 1).min(self.grid.cols() - 1);
            }
            GameAction::Toggle => return self.toggle_at(self.cursor),
            GameAction::Restart => {
                self.grid = Grid::random(&self.config, &mut self.rng)?;
                self.cursor = Coord::new(0, 0);
                self.moves = 0;
            }
        }
        Ok(())
    }

    /// Toggle a specific cell, bypassing the cursor.
    ///
    /// This is the raw interaction contract: flip `coord` and its in-bounds
    /// neighbors, then let the caller re-check the outcome. Gated on the
    /// terminal state like `Toggle`.
    pub fn toggle_at(&mut self, coord: Coord) -> Result<(), GridError> {
        if self.won() {
            return Ok(());
        }
        self.grid = self.grid.toggled(coord)?;
        self.moves += 1;
        Ok(())
    }
}
