//! Injectable randomness for the generators.
//!
//! Everything that rolls dice takes a `&mut impl RandomSource`, so tests can
//! swap the production generator for a seeded or scripted one.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform random integers
pub trait RandomSource {
    /// Uniform integer in `[low, high]`. Requires `low <= high`.
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64;

    /// Uniform integer in `[low, high)`. Requires `low < high`.
    fn range_exclusive(&mut self, low: i64, high: i64) -> i64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        (**self).range_inclusive(low, high)
    }

    fn range_exclusive(&mut self, low: i64, high: i64) -> i64 {
        (**self).range_exclusive(low, high)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        RngSource { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<ChaCha8Rng> {
    /// Deterministic source for reproducible rolls
    pub fn seeded(seed: u64) -> Self {
        RngSource::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Source seeded from the operating system
    pub fn from_entropy() -> Self {
        RngSource::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..=high)
    }

    fn range_exclusive(&mut self, low: i64, high: i64) -> i64 {
        self.rng.gen_range(low..high)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Each value is clamped into the requested range, so a script can say
/// "as high as possible" with a large number without knowing the bounds.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i64>,
    index: usize,
}

impl ScriptedSource {
    pub fn new(values: Vec<i64>) -> Self {
        ScriptedSource {
            values,
            index: 0,
        }
    }

    /// A source that always returns the same value
    pub fn constant(value: i64) -> Self {
        Self::new(vec![value])
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.index
    }

    fn next_value(&mut self) -> i64 {
        let value = if self.values.is_empty() {
            0
        } else {
            self.values[self.index % self.values.len()]
        };
        self.index += 1;
        value
    }
}

impl RandomSource for ScriptedSource {
    fn range_inclusive(&mut self, low: i64, high: i64) -> i64 {
        self.next_value().clamp(low, high)
    }

    fn range_exclusive(&mut self, low: i64, high: i64) -> i64 {
        self.next_value().clamp(low, high - 1)
    }
}
