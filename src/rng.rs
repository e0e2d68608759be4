//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the random source every selection
//! strategy draws from. It is passed explicitly to each call, so a test can
//! seed it and replay a selection exactly, while production code seeds it
//! from system entropy.
//!
//! ## Example
//!
//! ```rust
//! use genselect::rng::RandomNumberGenerator;
//!
//! let mut rng = RandomNumberGenerator::from_seed(7);
//! let random_numbers = rng.fetch_uniform(0.0, 1.0, 5);
//!
//! for number in random_numbers {
//!     assert!((0.0..1.0).contains(&number));
//! }
//! ```

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::VecDeque;

/// A wrapper around the `rand` crate's `StdRng` that provides the draws
/// used by the selection strategies.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// Two generators built from the same seed produce the same stream, so
    /// any strategy called with them on the same population returns the same
    /// winners.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a value from the half-open unit interval `(0, 1]`.
    ///
    /// Roulette pointers are resolved with `acc < r <= acc + p`, which can
    /// never match `r == 0`; drawing from `(0, 1]` keeps every pointer
    /// resolvable.
    pub fn unit(&mut self) -> f64 {
        1.0 - self.rng.gen::<f64>()
    }

    /// Draws a value from `[from, to)`.
    ///
    /// `from` must be strictly less than `to`.
    pub fn uniform(&mut self, from: f64, to: f64) -> f64 {
        self.rng.gen_range(from..to)
    }

    /// Draws an index uniformly from `[0, len - 1]`.
    ///
    /// `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    /// Generates a specified number of random floating-point numbers within the given range.
    ///
    /// # Parameters
    ///
    /// - `from`: The lower bound of the range (inclusive).
    /// - `to`: The upper bound of the range (exclusive).
    /// - `num`: The number of random numbers to generate.
    pub fn fetch_uniform(&mut self, from: f64, to: f64, num: usize) -> VecDeque<f64> {
        let mut uniform_numbers = VecDeque::with_capacity(num);
        uniform_numbers.extend((0..num).map(|_| self.uniform(from, to)));
        uniform_numbers
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
