use codex_core::{Category, EntityTemplate, Stats};
use serde::Deserialize;

/// TOML configuration for a codex catalog file
#[derive(Debug, Deserialize)]
pub struct CatalogFileConfig {
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

/// Configuration for a single codex entry
#[derive(Debug, Deserialize)]
pub struct EntryConfig {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub alpha_name: Option<String>,
    #[serde(rename = "type", default)]
    pub category: Category,
    #[serde(default = "default_stat")]
    pub base_hp: u64,
    #[serde(default = "default_stat")]
    pub base_attack: u64,
    #[serde(default = "default_stat")]
    pub base_defense: u64,
    #[serde(default = "default_stat")]
    pub base_speed: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub min_level: Option<u32>,
}

fn default_stat() -> u64 {
    5
}

/// Allowed values for `min_level`
pub const MIN_LEVEL_RANGE: std::ops::RangeInclusive<u32> = 1..=5;

impl EntryConfig {
    /// Check the entry and convert it into a template.
    ///
    /// The error describes what is wrong with the row.
    pub fn into_template(self) -> Result<EntityTemplate, String> {
        let stats = Stats::new(
            self.base_hp,
            self.base_attack,
            self.base_defense,
            self.base_speed,
        );
        if !stats.all_positive() {
            return Err(format!("('{}') has a zero base stat", self.name));
        }
        if let Some(level) = self.min_level {
            if !MIN_LEVEL_RANGE.contains(&level) {
                return Err(format!(
                    "('{}') has min_level {} outside {}-{}",
                    self.name,
                    level,
                    MIN_LEVEL_RANGE.start(),
                    MIN_LEVEL_RANGE.end()
                ));
            }
        }

        Ok(EntityTemplate {
            id: self.id,
            name: self.name,
            alpha_name: self.alpha_name,
            category: self.category,
            stats,
            image: self.image,
            paid: self.paid,
            min_level: self.min_level,
        })
    }
}
