use crate::types::{AccessTier, Category, Rarity, Stats};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable codex row as stored by the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityTemplate {
    /// Primary key
    pub id: u32,
    pub name: String,
    /// Organised name used for alphabetical listings
    #[serde(default)]
    pub alpha_name: Option<String>,
    #[serde(rename = "type", default)]
    pub category: Category,
    #[serde(flatten)]
    pub stats: Stats,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub paid: bool,
    /// Minimum requester level at which this entry can be drawn
    #[serde(default)]
    pub min_level: Option<u32>,
}

impl EntityTemplate {
    pub fn access_tier(&self) -> AccessTier {
        AccessTier::from_paid(self.paid)
    }

    /// Whether a requester at `level` meets this entry's level requirement.
    ///
    /// Entries without a requirement never qualify.
    pub fn unlocked_at(&self, level: u32) -> bool {
        self.min_level.is_some_and(|min| min <= level)
    }
}

impl fmt::Display for EntityTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A freshly rolled weapon or enemy derived from a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedInstance {
    // === Template fields ===
    pub id: u32,
    pub name: String,
    pub alpha_name: Option<String>,
    #[serde(rename = "type")]
    pub category: Category,
    pub image: String,
    pub paid: bool,
    pub min_level: Option<u32>,

    // === Rolled fields ===
    /// Scaled stats
    #[serde(flatten)]
    pub stats: Stats,
    pub level: u32,
    /// Weapons only
    pub rarity: Option<Rarity>,
    /// Weapons only
    pub rarity_text: Option<String>,
}

impl GeneratedInstance {
    /// Start an unscaled level 1 instance from a template
    pub(crate) fn from_template(template: EntityTemplate) -> Self {
        GeneratedInstance {
            id: template.id,
            name: template.name,
            alpha_name: template.alpha_name,
            category: template.category,
            image: template.image,
            paid: template.paid,
            min_level: template.min_level,
            stats: template.stats,
            level: 1,
            rarity: None,
            rarity_text: None,
        }
    }

    pub(crate) fn set_rarity(&mut self, rarity: Rarity) {
        self.rarity = Some(rarity);
        self.rarity_text = Some(rarity.label().to_string());
    }
}

impl fmt::Display for GeneratedInstance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "══ {} ══", self.name)?;
        match self.rarity {
            Some(rarity) => writeln!(f, "Level {} {} ({})", self.level, self.category, rarity)?,
            None => writeln!(f, "Level {} {}", self.level, self.category)?,
        }

        writeln!(f)?;
        writeln!(f, "Stats")?;
        writeln!(f, "  HP: {}", self.stats.hp)?;
        writeln!(f, "  Attack: {}", self.stats.attack)?;
        writeln!(f, "  Defense: {}", self.stats.defense)?;
        write!(f, "  Speed: {}", self.stats.speed)?;

        if self.paid {
            writeln!(f)?;
            write!(f, "Premium")?;
        }

        Ok(())
    }
}
