//! Rarity resolution - successive upgrade rolls
//!
//! Starting at Common, each roll of d100 that meets the current threshold
//! upgrades the weapon one tier and spends one level. The threshold is
//!
//! `threshold = 100 - (level - 1) * step`
//!
//! so every spent level makes the next upgrade harder. The climb ends at the
//! first failed roll, once the threshold reaches 100 (level 1), or at Mythic.

use crate::config::RarityTuning;
use crate::random::RandomSource;
use crate::types::{Rarity, MAX_RARITY};
use crate::CodexError;

/// Resolves a weapon rarity from the weapon's level
#[derive(Debug, Clone, Default)]
pub struct RarityResolver {
    tuning: RarityTuning,
}

impl RarityResolver {
    pub fn new(tuning: RarityTuning) -> Self {
        RarityResolver { tuning }
    }

    /// Roll a rarity for a weapon of `level`.
    ///
    /// Consumes at most `min(level - 1, 4)` draws. Level 1 always yields
    /// Common without drawing.
    pub fn resolve<R: RandomSource>(&self, level: u32, rng: &mut R) -> Result<Rarity, CodexError> {
        if level == 0 {
            return Err(CodexError::InvalidArgument(
                "rarity level must be at least 1".to_string(),
            ));
        }

        let mut level = i64::from(level);
        let mut tier: u8 = 1;

        loop {
            let threshold = self.threshold(level);
            if threshold >= 100 || tier == MAX_RARITY {
                break;
            }

            let roll = rng.range_inclusive(1, 100);
            tracing::trace!(level, tier, threshold, roll, "rarity roll");
            if roll < threshold {
                break;
            }

            level -= 1;
            tier += 1;
        }

        Rarity::from_tier(tier).ok_or_else(|| {
            CodexError::InvalidArgument(format!("resolved rarity tier {} out of range", tier))
        })
    }

    /// Percentage a d100 must meet to upgrade at `level`.
    ///
    /// Saturates instead of overflowing for unvalidated tunings.
    pub fn threshold(&self, level: i64) -> i64 {
        let penalty = level.saturating_sub(1).saturating_mul(self.tuning.threshold_step);
        100i64.saturating_sub(penalty)
    }
}
