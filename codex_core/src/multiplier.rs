//! Stat multiplier - level and rarity scaled random boosts
//!
//! Formula (with the default divisors of 5):
//! - floor   = round((1 + (level - 1) / 5) * 100)
//! - ceiling = round((1 + (level - 1) / 5 + rarity / 5) * 100)
//! - multiplier = uniform[floor, ceiling) / 100
//! - scaled stat = ceil(stat * multiplier)
//!
//! Rounding is half-to-even. The ceiling is exclusive, so the largest
//! multiplier that can be drawn is `(ceiling - 1) / 100`.

use crate::config::MultiplierTuning;
use crate::random::RandomSource;
use crate::types::MAX_RARITY;
use crate::CodexError;

/// Integer bounds of a multiplier draw, in hundredths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MultiplierRange {
    /// Inclusive
    pub min: i64,
    /// Exclusive
    pub max: i64,
}

impl MultiplierRange {
    /// Smallest multiplier this range can produce
    pub fn lowest(&self) -> f64 {
        self.min as f64 / 100.0
    }

    /// Largest multiplier this range can produce
    pub fn highest(&self) -> f64 {
        (self.max - 1) as f64 / 100.0
    }
}

/// Computes and applies randomized stat multipliers
#[derive(Debug, Clone, Default)]
pub struct StatMultiplier {
    tuning: MultiplierTuning,
}

impl StatMultiplier {
    pub fn new(tuning: MultiplierTuning) -> Self {
        StatMultiplier { tuning }
    }

    /// Compute the draw window for `level` and `rarity`.
    ///
    /// Fails when the inputs are out of range or the window is empty.
    pub fn range(&self, level: u32, rarity: u8) -> Result<MultiplierRange, CodexError> {
        if level == 0 {
            return Err(CodexError::InvalidArgument(
                "multiplier level must be at least 1".to_string(),
            ));
        }
        if rarity == 0 || rarity > MAX_RARITY {
            return Err(CodexError::InvalidArgument(format!(
                "multiplier rarity {} out of range 1-{}",
                rarity, MAX_RARITY
            )));
        }

        let level_bonus = f64::from(level - 1) / self.tuning.level_divisor;
        let rarity_bonus = f64::from(rarity) / self.tuning.rarity_divisor;

        let min = ((1.0 + level_bonus) * 100.0).round_ties_even() as i64;
        let max = ((1.0 + level_bonus + rarity_bonus) * 100.0).round_ties_even() as i64;

        if max <= min {
            return Err(CodexError::InvalidArgument(format!(
                "empty multiplier range [{}, {}) for level {} rarity {}",
                min, max, level, rarity
            )));
        }

        Ok(MultiplierRange { min, max })
    }

    /// Draw a multiplier for `level` and `rarity`
    pub fn multiplier<R: RandomSource>(
        &self,
        level: u32,
        rarity: u8,
        rng: &mut R,
    ) -> Result<f64, CodexError> {
        let range = self.range(level, rarity)?;
        let hundredths = rng.range_exclusive(range.min, range.max);
        Ok(hundredths as f64 / 100.0)
    }

    /// Scale a single stat by a freshly drawn multiplier, rounding up
    pub fn apply_to_stat<R: RandomSource>(
        &self,
        stat: u64,
        level: u32,
        rarity: u8,
        rng: &mut R,
    ) -> Result<u64, CodexError> {
        let multiplier = self.multiplier(level, rarity, rng)?;
        let scaled = (stat as f64 * multiplier).ceil();
        // u64::MAX as f64 rounds up to 2^64, which is itself out of range
        if scaled >= u64::MAX as f64 {
            return Err(CodexError::InvalidArgument(format!(
                "stat {} overflows when scaled by {}",
                stat, multiplier
            )));
        }
        Ok(scaled as u64)
    }
}
