//! Puzzles domain: the injectable random source every draw goes through.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer and shuffle primitives used by the selector and generator.
///
/// Tie-breaks, operand draws, distractor draws and the final answer shuffle
/// all go through one source, so swapping the source swaps every draw.
pub trait RandomSource {
    /// Uniform integer in the closed range `[low, high]`.
    fn next_in_range(&mut self, low: u32, high: u32) -> u32;

    /// Uniformly permute `values` in place.
    fn shuffle(&mut self, values: &mut [u32]);

    /// Uniform index into a slice of `len` elements (`len` must be non-zero).
    fn choose_index(&mut self, len: usize) -> usize {
        let high = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.next_in_range(0, high) as usize
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ChaCha8Rng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        self.rng.random_range(low..=high)
    }

    fn shuffle(&mut self, values: &mut [u32]) {
        values.shuffle(&mut self.rng);
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len.max(1))
    }
}

/// Replays a fixed sequence of draws, then falls back to a seeded generator.
///
/// Scripted draws are returned verbatim (the script must respect the ranges
/// the engine asks for). Shuffles leave the order untouched so callers can
/// assert on generation order.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: VecDeque<u32>,
    fallback: RngSource<ChaCha8Rng>,
    /// Number of scripted draws consumed so far
    pub consumed: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: draws.into_iter().collect(),
            fallback: RngSource::seeded(0),
            consumed: 0,
        }
    }

    /// Replace the generator used once the script is exhausted.
    pub fn with_fallback_seed(mut self, seed: u64) -> Self {
        self.fallback = RngSource::seeded(seed);
        self
    }

    /// Scripted draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: u32, high: u32) -> u32 {
        match self.script.pop_front() {
            Some(value) => {
                self.consumed += 1;
                value
            }
            None => self.fallback.next_in_range(low, high),
        }
    }

    fn shuffle(&mut self, _values: &mut [u32]) {}
}
