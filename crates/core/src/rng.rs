//! RNG module - seedable randomness for shape generation
//!
//! Shape kind, orientation and color are each drawn independently and uniformly.
//! The engine takes its randomizer as a type parameter so tests and replays can
//! pin the sequence; [`SimpleRng`] is the default.

/// Source of uniform random numbers for the engine
pub trait Randomizer {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
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

    /// Current state, usable as a seed to replay from this point
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Randomizer for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // Low bits of a power-of-two LCG have short periods; hand out the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
