//! Generation tuning loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Error loading generation tuning
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Tunable constants for rarity and stat rolls.
///
/// The defaults give the stock codex behaviour: each level above 1 makes a
/// rarity upgrade 20 points easier, and the multiplier window grows by 0.2
/// per level and per rarity tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default)]
    pub rarity: RarityTuning,
    #[serde(default)]
    pub multiplier: MultiplierTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RarityTuning {
    /// Percentage points the upgrade threshold drops per level above 1
    #[serde(default = "default_threshold_step")]
    pub threshold_step: i64,
}

impl Default for RarityTuning {
    fn default() -> Self {
        RarityTuning {
            threshold_step: default_threshold_step(),
        }
    }
}

fn default_threshold_step() -> i64 {
    20
}

/// Allowed values for `rarity.threshold_step`; past 100 every level above 1
/// already guarantees an upgrade
pub const THRESHOLD_STEP_RANGE: std::ops::RangeInclusive<i64> = 1..=100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTuning {
    /// Levels per +1.0 on the multiplier floor
    #[serde(default = "default_divisor")]
    pub level_divisor: f64,
    /// Rarity tiers per +1.0 on the multiplier window width
    #[serde(default = "default_divisor")]
    pub rarity_divisor: f64,
}

impl Default for MultiplierTuning {
    fn default() -> Self {
        MultiplierTuning {
            level_divisor: default_divisor(),
            rarity_divisor: default_divisor(),
        }
    }
}

fn default_divisor() -> f64 {
    5.0
}

impl GenerationConfig {
    /// Load tuning from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse tuning from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: GenerationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !THRESHOLD_STEP_RANGE.contains(&self.rarity.threshold_step) {
            return Err(ConfigError::Validation(format!(
                "rarity.threshold_step must be within {}-{}, got {}",
                THRESHOLD_STEP_RANGE.start(),
                THRESHOLD_STEP_RANGE.end(),
                self.rarity.threshold_step
            )));
        }
        if !is_positive(self.multiplier.level_divisor) {
            return Err(ConfigError::Validation(format!(
                "multiplier.level_divisor must be positive, got {}",
                self.multiplier.level_divisor
            )));
        }
        if !is_positive(self.multiplier.rarity_divisor) {
            return Err(ConfigError::Validation(format!(
                "multiplier.rarity_divisor must be positive, got {}",
                self.multiplier.rarity_divisor
            )));
        }
        Ok(())
    }
}

/// False for zero, negatives, and NaN
fn is_positive(value: f64) -> bool {
    value > 0.0
}
