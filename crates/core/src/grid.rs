//! Grid module - the Lights Out board
//!
//! A fixed `rows x cols` boolean grid, zero-based and row-major, stored as a
//! flat array behind a bounds-checked accessor. Toggling a cell flips it and
//! its in-bounds orthogonal neighbors; the game is won when every cell is
//! unlit.
//!
//! Dimensions never change after construction, and toggling is pure: it
//! returns a fresh grid and leaves the input untouched, so callers can layer
//! snapshot semantics on top later.

use thiserror::Error;

use crate::rng::SimpleRng;
use crate::types::{Coord, GameOutcome, GridConfig};

/// Errors from grid construction and toggling.
///
/// Both are programming errors on the caller's side, surfaced immediately.
/// Out-of-bounds *neighbors* of a toggle are not errors; they are skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimensions: {rows}x{cols}")]
    InvalidDimension { rows: usize, cols: usize },
    #[error("coordinate ({row}, {col}) out of bounds for {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Plus-shaped neighborhood: the cell itself and its orthogonal neighbors.
const PLUS_OFFSETS: [(isize, isize); 5] = [(0, 0), (0, -1), (0, 1), (-1, 0), (1, 0)];

/// The game grid. Dimensions are fixed for the lifetime of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major (row * cols + col). true = lit.
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-unlit grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        })
    }

    /// Create a grid where each cell is independently lit with probability
    /// `config.light_chance`.
    ///
    /// Randomness comes only from the caller-supplied RNG, so the same seed
    /// reproduces the same starting board.
    pub fn random(config: &GridConfig, rng: &mut SimpleRng) -> Result<Self, GridError> {
        let mut grid = Self::new(config.rows, config.cols)?;
        for cell in &mut grid.cells {
            *cell = rng.chance(config.light_chance);
        }
        Ok(grid)
    }

    /// Build a grid from nested rows (the array-of-arrays shape the original
    /// browser game used). Rows must be non-empty and rectangular.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self, GridError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        if nrows == 0 || ncols == 0 || rows.iter().any(|r| r.len() != ncols) {
            return Err(GridError::InvalidDimension {
                rows: nrows,
                cols: ncols,
            });
        }
        Ok(Self {
            rows: nrows,
            cols: ncols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Nested-rows view of the grid.
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells.chunks(self.cols).map(<[bool]>::to_vec).collect()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat index for (row, col); None when off the grid.
    #[inline(always)]
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || row >= self.rows as isize || col < 0 || col >= self.cols as isize {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Cell state at (row, col); None when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.index(row as isize, col as isize).map(|i| self.cells[i])
    }

    /// True if the cell at `coord` is lit. Out of bounds reads as unlit.
    pub fn is_lit(&self, coord: Coord) -> bool {
        self.get(coord.row, coord.col).unwrap_or(false)
    }

    /// Number of lit cells.
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// True iff no cell is lit.
    pub fn is_all_unlit(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    /// Derived outcome: `Won` iff every cell is unlit.
    pub fn outcome(&self) -> GameOutcome {
        if self.is_all_unlit() {
            GameOutcome::Won
        } else {
            GameOutcome::InProgress
        }
    }

    /// Return a new grid with the cell at `coord` and its in-bounds
    /// orthogonal neighbors flipped. The receiver is left untouched.
    ///
    /// Neighbors falling off the edge are skipped (no wraparound). A center
    /// cell off the grid is [`GridError::OutOfBounds`], not a silent no-op.
    pub fn toggled(&self, coord: Coord) -> Result<Self, GridError> {
        if self.get(coord.row, coord.col).is_none() {
            return Err(GridError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut next = self.clone();
        for (dr, dc) in PLUS_OFFSETS {
            if let Some(i) = self.index(coord.row as isize + dr, coord.col as isize + dc) {
                next.cells[i] = !next.cells[i];
            }
        }
        Ok(next)
    }
}
