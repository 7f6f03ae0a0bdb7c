use crate::catalog::Catalog;
use crate::config::{ConfigError, GenerationConfig};
use crate::entry::GeneratedInstance;
use crate::multiplier::StatMultiplier;
use crate::random::RandomSource;
use crate::rarity::RarityResolver;
use crate::types::{AccessTiers, Category, Rarity, Stats};
use crate::CodexError;

/// Spawns randomized weapons and enemies from catalog templates
#[derive(Debug, Clone)]
pub struct Generator<C> {
    catalog: C,
    rarity: RarityResolver,
    multiplier: StatMultiplier,
}

impl<C: Catalog> Generator<C> {
    /// Create a generator with the stock tuning
    pub fn new(catalog: C) -> Self {
        Generator {
            catalog,
            rarity: RarityResolver::default(),
            multiplier: StatMultiplier::default(),
        }
    }

    /// Create a generator with custom tuning, rejecting out-of-range values
    pub fn with_config(catalog: C, config: GenerationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Generator {
            catalog,
            rarity: RarityResolver::new(config.rarity),
            multiplier: StatMultiplier::new(config.multiplier),
        })
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Generate a weapon for a requester at `requested_level`.
    ///
    /// The weapon's level is uniform in `1..=requested_level`, its rarity is
    /// rolled from that level, and each stat is scaled once per rarity tier.
    /// Level 1 weapons are Common and deliberately skip the single
    /// `[1.00, 1.20)` pass they would otherwise get, so they come back with
    /// their template stats unchanged, matching level 1 enemies.
    pub fn generate_weapon<R: RandomSource>(
        &self,
        tiers: &AccessTiers,
        requested_level: u32,
        rng: &mut R,
    ) -> Result<GeneratedInstance, CodexError> {
        check_requested_level(requested_level)?;

        let template = self
            .catalog
            .find_random(Category::Weapon, tiers, requested_level, rng)?;
        let mut weapon = GeneratedInstance::from_template(template);

        let (level, rarity) = if requested_level > 1 {
            let level = roll_level(requested_level, rng);
            (level, self.rarity.resolve(level, rng)?)
        } else {
            (1, Rarity::Common)
        };
        weapon.level = level;
        weapon.set_rarity(rarity);

        if level > 1 {
            let tier = rarity.tier();
            weapon.stats = self.scale_stats(weapon.stats, level, tier, tier.into(), rng)?;
        }

        tracing::debug!(
            name = %weapon.name,
            level = weapon.level,
            rarity = %rarity,
            "generated weapon"
        );
        Ok(weapon)
    }

    /// Generate an enemy for a requester at `requested_level`.
    ///
    /// The enemy's level is uniform in `1..=requested_level` and each stat is
    /// scaled `level - 1` times. Enemies have no rarity.
    pub fn generate_enemy<R: RandomSource>(
        &self,
        tiers: &AccessTiers,
        requested_level: u32,
        rng: &mut R,
    ) -> Result<GeneratedInstance, CodexError> {
        check_requested_level(requested_level)?;

        let template = self
            .catalog
            .find_random(Category::Enemy, tiers, requested_level, rng)?;
        let mut enemy = GeneratedInstance::from_template(template);

        if requested_level > 1 {
            let level = roll_level(requested_level, rng);
            enemy.level = level;
            enemy.stats = self.scale_stats(enemy.stats, level, 1, level - 1, rng)?;
        }

        tracing::debug!(name = %enemy.name, level = enemy.level, "generated enemy");
        Ok(enemy)
    }

    /// Apply the multiplier to all four stats `passes` times, compounding.
    ///
    /// Within a pass the stats are drawn in hp, attack, speed, defense order.
    fn scale_stats<R: RandomSource>(
        &self,
        mut stats: Stats,
        level: u32,
        rarity: u8,
        passes: u32,
        rng: &mut R,
    ) -> Result<Stats, CodexError> {
        for _ in 0..passes {
            stats.hp = self.multiplier.apply_to_stat(stats.hp, level, rarity, rng)?;
            stats.attack = self.multiplier.apply_to_stat(stats.attack, level, rarity, rng)?;
            stats.speed = self.multiplier.apply_to_stat(stats.speed, level, rarity, rng)?;
            stats.defense = self.multiplier.apply_to_stat(stats.defense, level, rarity, rng)?;
        }
        Ok(stats)
    }
}

fn check_requested_level(requested_level: u32) -> Result<(), CodexError> {
    if requested_level == 0 {
        return Err(CodexError::InvalidArgument(
            "requested level must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn roll_level<R: RandomSource>(requested_level: u32, rng: &mut R) -> u32 {
    rng.range_inclusive(1, i64::from(requested_level)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::pick_uniform;
    use crate::entry::EntityTemplate;
    use crate::random::{RngSource, ScriptedSource};

    /// Catalog backed by a plain list
    struct ListCatalog(Vec<EntityTemplate>);

    impl Catalog for ListCatalog {
        fn find_random<R: RandomSource>(
            &self,
            category: Category,
            tiers: &AccessTiers,
            level: u32,
            rng: &mut R,
        ) -> Result<EntityTemplate, CodexError> {
            let candidates = self
                .0
                .iter()
                .filter(|t| t.category == category)
                .filter(|t| tiers.contains(t.access_tier()))
                .filter(|t| t.unlocked_at(level))
                .cloned()
                .collect();
            pick_uniform(candidates, category, level, rng)
        }
    }

    fn template(id: u32, name: &str, category: Category, stats: Stats, paid: bool) -> EntityTemplate {
        EntityTemplate {
            id,
            name: name.to_string(),
            alpha_name: None,
            category,
            stats,
            image: format!("{}.png", id),
            paid,
            min_level: Some(1),
        }
    }

    fn catalog() -> ListCatalog {
        ListCatalog(vec![
            template(1, "Rusty Sword", Category::Weapon, Stats::new(4, 8, 2, 6), false),
            template(2, "Goblin", Category::Enemy, Stats::new(10, 4, 4, 8), false),
            template(3, "Knight", Category::Hero, Stats::new(20, 6, 8, 4), false),
            template(4, "Dragon", Category::Enemy, Stats::new(80, 20, 16, 4), true),
        ])
    }

    #[test]
    fn test_weapon_level_one_keeps_template_stats() {
        let generator = Generator::new(catalog());
        // Only the template pick is drawn
        let mut rng = ScriptedSource::constant(0);
        let weapon = generator
            .generate_weapon(&AccessTiers::for_requester(false), 1, &mut rng)
            .unwrap();

        assert_eq!(weapon.name, "Rusty Sword");
        assert_eq!(weapon.level, 1);
        assert_eq!(weapon.rarity, Some(Rarity::Common));
        assert_eq!(weapon.rarity_text.as_deref(), Some("Common"));
        assert_eq!(weapon.stats, Stats::new(4, 8, 2, 6));
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn test_weapon_rolled_to_level_one_keeps_template_stats() {
        let generator = Generator::new(catalog());
        // template index, level 1
        let mut rng = ScriptedSource::new(vec![0, 1]);
        let weapon = generator
            .generate_weapon(&AccessTiers::for_requester(false), 5, &mut rng)
            .unwrap();

        assert_eq!(weapon.level, 1);
        assert_eq!(weapon.rarity, Some(Rarity::Common));
        assert_eq!(weapon.stats, Stats::new(4, 8, 2, 6));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn test_weapon_rare_at_level_five() {
        let generator = Generator::new(catalog());
        // template index 0, level 5, rarity rolls pass/pass/fail, then
        // twelve multiplier draws clamped into the [180, 240) window
        let mut script = vec![0, 5, 50, 50, 10];
        script.extend(std::iter::repeat(200).take(12));
        let mut rng = ScriptedSource::new(script);

        let weapon = generator
            .generate_weapon(&AccessTiers::for_requester(false), 5, &mut rng)
            .unwrap();

        assert_eq!(weapon.level, 5);
        assert_eq!(weapon.rarity, Some(Rarity::Rare));
        assert_eq!(weapon.rarity_text.as_deref(), Some("Rare"));
        // Three compounding passes of x2.00
        assert_eq!(weapon.stats, Stats::new(32, 64, 16, 48));
        assert!(weapon.stats.dominates(&Stats::new(4, 8, 2, 6)));
        assert_eq!(rng.draws(), 17);
    }

    #[test]
    fn test_weapon_passes_compound() {
        let generator = Generator::new(catalog());
        // level 2, rarity roll fails (threshold 80), one pass in [120, 140)
        let mut rng = ScriptedSource::new(vec![0, 2, 1, 125, 125, 125, 125]);
        let weapon = generator
            .generate_weapon(&AccessTiers::for_requester(false), 3, &mut rng)
            .unwrap();

        assert_eq!(weapon.level, 2);
        assert_eq!(weapon.rarity, Some(Rarity::Common));
        // 4*1.25=5, 8*1.25=10, 2*1.25=2.5->3, 6*1.25=7.5->8
        assert_eq!(weapon.stats, Stats::new(5, 10, 3, 8));
    }

    #[test]
    fn test_enemy_level_one_keeps_template_stats() {
        let generator = Generator::new(catalog());
        let mut rng = ScriptedSource::constant(0);
        let enemy = generator
            .generate_enemy(&AccessTiers::for_requester(false), 1, &mut rng)
            .unwrap();

        assert_eq!(enemy.name, "Goblin");
        assert_eq!(enemy.level, 1);
        assert_eq!(enemy.rarity, None);
        assert_eq!(enemy.rarity_text, None);
        assert_eq!(enemy.stats, Stats::new(10, 4, 4, 8));
    }

    #[test]
    fn test_enemy_scaled_level_minus_one_times() {
        let generator = Generator::new(catalog());
        // template index 0, level 3 -> two passes in [140, 160)
        let mut script = vec![0, 3];
        script.extend(std::iter::repeat(150).take(8));
        let mut rng = ScriptedSource::new(script);

        let enemy = generator
            .generate_enemy(&AccessTiers::for_requester(false), 4, &mut rng)
            .unwrap();

        assert_eq!(enemy.level, 3);
        // 10 -> 15 -> 22.5 -> 23; 4 -> 6 -> 9; 8 -> 12 -> 18
        assert_eq!(enemy.stats, Stats::new(23, 9, 9, 18));
        assert_eq!(rng.draws(), 10);
    }

    #[test]
    fn test_enemy_high_level_scales_without_overflow() {
        let generator = Generator::new(catalog());
        // Dragon at level 20: nineteen passes of at least x4.80
        let mut rng = ScriptedSource::new(vec![1, 20, 0]);
        let enemy = generator
            .generate_enemy(&AccessTiers::for_requester(true), 20, &mut rng)
            .unwrap();

        assert_eq!(enemy.name, "Dragon");
        assert_eq!(enemy.level, 20);
        assert!(enemy.stats.all_positive());
        assert!(enemy.stats.hp > u64::from(u32::MAX));
        assert!(enemy.stats.dominates(&Stats::new(80, 20, 16, 4)));
    }

    #[test]
    fn test_with_config_rejects_invalid_tuning() {
        let mut config = GenerationConfig::default();
        config.multiplier.level_divisor = 0.0;
        let result = Generator::with_config(catalog(), config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let mut config = GenerationConfig::default();
        config.rarity.threshold_step = i64::MAX;
        let result = Generator::with_config(catalog(), config);
        assert!(matches!(result, Err(ConfigError::Validation(_))));

        let mut config = GenerationConfig::default();
        config.rarity.threshold_step = 10;
        assert!(Generator::with_config(catalog(), config).is_ok());
    }

    #[test]
    fn test_premium_content_requires_premium_tiers() {
        let generator = Generator::new(catalog());
        let mut rng = ScriptedSource::constant(1);

        // Free requesters only see the goblin
        let enemy = generator
            .generate_enemy(&AccessTiers::for_requester(false), 1, &mut rng)
            .unwrap();
        assert_eq!(enemy.name, "Goblin");

        // Premium requesters can draw the dragon
        let enemy = generator
            .generate_enemy(&AccessTiers::for_requester(true), 1, &mut rng)
            .unwrap();
        assert_eq!(enemy.name, "Dragon");
        assert!(enemy.paid);
    }

    #[test]
    fn test_missing_category_is_not_found() {
        let generator = Generator::new(ListCatalog(vec![template(
            1,
            "Goblin",
            Category::Enemy,
            Stats::default(),
            false,
        )]));
        let mut rng = RngSource::seeded(3);
        let result = generator.generate_weapon(&AccessTiers::for_requester(true), 4, &mut rng);
        assert!(matches!(
            result,
            Err(CodexError::NotFound {
                category: Category::Weapon,
                level: 4
            })
        ));
    }

    #[test]
    fn test_requested_level_zero_rejected() {
        let generator = Generator::new(catalog());
        let mut rng = RngSource::seeded(3);
        let result = generator.generate_enemy(&AccessTiers::default(), 0, &mut rng);
        assert!(matches!(result, Err(CodexError::InvalidArgument(_))));
    }

    #[test]
    fn test_seeded_generation_invariants() {
        let generator = Generator::new(catalog());
        let tiers = AccessTiers::for_requester(true);
        let mut rng = RngSource::seeded(77);

        for requested in 1..=12 {
            for _ in 0..50 {
                let weapon = generator.generate_weapon(&tiers, requested, &mut rng).unwrap();
                assert!(weapon.level >= 1 && weapon.level <= requested);
                let rarity = weapon.rarity.unwrap();
                assert!(u32::from(rarity.tier()) <= weapon.level);
                assert!(weapon.stats.all_positive());
                assert!(weapon.stats.dominates(&Stats::new(4, 8, 2, 6)));

                let enemy = generator.generate_enemy(&tiers, requested, &mut rng).unwrap();
                assert!(enemy.level >= 1 && enemy.level <= requested);
                assert!(enemy.rarity.is_none());
                assert!(enemy.stats.all_positive());
            }
        }
    }
}
