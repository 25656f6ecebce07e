//! Random source abstraction.
//!
//! Every random decision of the generator goes through [`RandomSource`], so a
//! seeded RNG (or a scripted sequence in tests) makes generation reproducible.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

pub trait RandomSource {
    /// Uniform value in [0.0, 1.0).
    fn next_f64(&mut self) -> f64;

    /// Uniform index in [0, bound). Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Uniform value in [low, high]. Returns `low` when `high < low`.
    fn next_inclusive(&mut self, low: usize, high: usize) -> usize {
        if high <= low {
            return low;
        }
        low + self.next_below(high - low + 1)
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.gen_range(0..bound)
    }
}

/// Fisher-Yates shuffle driven by a [`RandomSource`].
pub fn shuffle<T>(slice: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_below(i + 1);
        slice.swap(i, j);
    }
}

/// Uniform pick usable through a trait object.
pub fn pick<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.next_below(items.len()))
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Replays a fixed list of values in [0.0, 1.0), cycling when exhausted.
///
/// Integer draws scale the current value onto the requested range, so a value
/// of 0.0 always picks the first option and 0.99 the last.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<f64>) -> Self {
        let values = if values.is_empty() { vec![0.0] } else { values };
        Self { values, cursor: 0 }
    }

    fn advance(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 0.999_999)
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        self.advance()
    }

    fn next_below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        ((self.advance() * bound as f64) as usize).min(bound - 1)
    }
}
