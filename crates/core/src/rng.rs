//! RNG module - seeded shape selection
//!
//! Spawns pick one of the seven shapes uniformly at random. A small LCG keeps
//! games reproducible from a seed, which the tests and benches rely on.

use crate::types::ShapeKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // Seed 0 is treated as 1.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Value in `[0, max)`.
    ///
    /// Scales by the high bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// A shape chosen uniformly from [`ShapeKind::ALL`].
    pub fn next_shape(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.next_range(ShapeKind::ALL.len() as u32) as usize]
    }

    /// Current state, usable as a seed to replay from this point.
    pub fn seed(&self) -> u32 {
        self.state
    }
}
