//! RNG module - injectable randomness for tile spawns
//!
//! The engine never reaches for a global generator. It draws from a
//! [`RandomSource`], so tests can pin spawn placement with a seed (or a
//! scripted source) while the binary uses an entropy-seeded generator.
//!
//! Also provides a simple LCG for deterministic testing.

use rand::rngs::StdRng;
use rand::RngCore;

/// Source of uniformly distributed integers for spawn placement.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

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

    /// Current generator state; feeding it back to [`SimpleRng::new`]
    /// reproduces the remaining sequence.
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG cycle with a short period; use the high half.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for StdRng {
    fn next_u32(&mut self) -> u32 {
        RngCore::next_u32(self)
    }

    fn next_range(&mut self, max: u32) -> u32 {
        rand::Rng::gen_range(self, 0..max)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// `next_range` reduces each scripted value modulo `max`, so a script of
/// `[idx, odds]` pairs picks the `idx`-th empty cell and a 2 (odds < 9) or a
/// 4 (odds == 9).
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        let values = if values.is_empty() { vec![0] } else { values };
        Self { values, pos: 0 }
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos = self.pos.wrapping_add(1);
        v
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}
