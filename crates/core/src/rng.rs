//! RNG module - deterministic board generation
//!
//! A small LCG is all the randomness the game needs. Randomness is injected
//! into [`crate::grid::Grid::random`] by the caller, never pulled from an
//! ambient global source, so the same seed always deals the same board.

use std::time::{SystemTime, UNIX_EPOCH};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the system clock, for unseeded interactive play.
    pub fn from_entropy() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
            .unwrap_or(1);
        Self::new(seed)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a random float in [0, 1)
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX) + 1.0)
    }

    /// Bernoulli draw: true with probability `p`.
    ///
    /// `p <= 0.0` never fires and `p >= 1.0` always fires.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Current internal state (for reporting a reproducible seed).
    pub fn state(&self) -> u32 {
        self.state
    }
}
