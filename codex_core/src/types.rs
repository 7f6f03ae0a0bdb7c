use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Highest rarity tier a weapon can reach
pub const MAX_RARITY: u8 = 5;

/// Codex entry categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Weapon,
    #[default]
    Enemy,
    Hero,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Weapon => "Weapon",
            Category::Enemy => "Enemy",
            Category::Hero => "Hero",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Entitlement required to receive a codex entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    #[default]
    Free,
    Premium,
}

impl AccessTier {
    /// Map the catalog's `paid` flag onto a tier
    pub fn from_paid(paid: bool) -> Self {
        if paid {
            AccessTier::Premium
        } else {
            AccessTier::Free
        }
    }

    pub fn is_paid(&self) -> bool {
        matches!(self, AccessTier::Premium)
    }
}

/// The set of access tiers a requester may draw from.
///
/// Free content is always included; premium requesters additionally see
/// premium content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessTiers(BTreeSet<AccessTier>);

impl AccessTiers {
    /// Build the allowed set for a requester
    pub fn for_requester(premium: bool) -> Self {
        let mut tiers = BTreeSet::from([AccessTier::Free]);
        if premium {
            tiers.insert(AccessTier::Premium);
        }
        AccessTiers(tiers)
    }

    pub fn contains(&self, tier: AccessTier) -> bool {
        self.0.contains(&tier)
    }

    pub fn iter(&self) -> impl Iterator<Item = AccessTier> + '_ {
        self.0.iter().copied()
    }
}

impl Default for AccessTiers {
    fn default() -> Self {
        Self::for_requester(false)
    }
}

/// The four scalable stats shared by every codex entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stats {
    #[serde(rename = "base_hp")]
    pub hp: u64,
    #[serde(rename = "base_attack")]
    pub attack: u64,
    #[serde(rename = "base_defense")]
    pub defense: u64,
    #[serde(rename = "base_speed")]
    pub speed: u64,
}

impl Stats {
    pub fn new(hp: u64, attack: u64, defense: u64, speed: u64) -> Self {
        Stats {
            hp,
            attack,
            defense,
            speed,
        }
    }

    /// True when every stat is at least as high as in `other`
    pub fn dominates(&self, other: &Stats) -> bool {
        self.hp >= other.hp
            && self.attack >= other.attack
            && self.defense >= other.defense
            && self.speed >= other.speed
    }

    pub fn all_positive(&self) -> bool {
        self.hp > 0 && self.attack > 0 && self.defense > 0 && self.speed > 0
    }
}

impl Default for Stats {
    fn default() -> Self {
        Stats::new(5, 5, 5, 5)
    }
}

/// Weapon quality grade
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Rarity {
    Common = 1,
    Uncommon = 2,
    Rare = 3,
    Epic = 4,
    Mythic = 5,
}

impl Rarity {
    /// Get all rarity variants, lowest first
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Mythic,
        ]
    }

    /// Look up a rarity by its numeric tier (1-5)
    pub fn from_tier(tier: u8) -> Option<Self> {
        tier.checked_sub(1)
            .and_then(|idx| Self::all().get(idx as usize))
            .copied()
    }

    pub fn tier(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Mythic => "Mythic",
        }
    }
}

impl From<Rarity> for u8 {
    fn from(rarity: Rarity) -> Self {
        rarity.tier()
    }
}

impl TryFrom<u8> for Rarity {
    type Error = String;

    fn try_from(tier: u8) -> Result<Self, Self::Error> {
        Rarity::from_tier(tier).ok_or_else(|| format!("rarity tier {} out of range 1-{}", tier, MAX_RARITY))
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
