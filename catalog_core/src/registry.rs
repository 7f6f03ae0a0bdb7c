use crate::config::CatalogFileConfig;
use crate::query::{SearchParams, SortKey};
use crate::ConfigError;
use codex_core::{
    pick_uniform, AccessTiers, Catalog, Category, CodexError, EntityTemplate, RandomSource,
};
use std::collections::BTreeMap;
use std::path::Path;

/// All codex templates, keyed and ordered by id, loaded from TOML files
#[derive(Debug, Clone, Default)]
pub struct CodexCatalog {
    entries: BTreeMap<u32, EntityTemplate>,
}

impl CodexCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load all catalog files from a directory (recursively)
    pub fn load(dir: &Path) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        catalog.load_dir(dir)?;
        tracing::debug!(dir = %dir.display(), entries = catalog.len(), "loaded codex catalog");
        Ok(catalog)
    }

    /// Parse a single catalog document
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let mut catalog = Self::new();
        catalog.load_str(content, Path::new("<inline>"))?;
        Ok(catalog)
    }

    /// Load catalog files from a directory recursively
    fn load_dir(&mut self, dir: &Path) -> Result<(), ConfigError> {
        if !dir.exists() {
            return Ok(());
        }

        let entries = std::fs::read_dir(dir).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(dir.to_path_buf()),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| ConfigError::Io {
                error: e,
                path: Some(dir.to_path_buf()),
            })?;
            paths.push(entry.path());
        }
        // Stable error reporting across platforms
        paths.sort();

        for path in paths {
            if path.is_dir() {
                self.load_dir(&path)?;
            } else if path.extension().is_some_and(|ext| ext == "toml") {
                self.load_file(&path)?;
            }
        }

        Ok(())
    }

    /// Load a single catalog file
    fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            error: e,
            path: Some(path.to_path_buf()),
        })?;
        self.load_str(&content, path)
    }

    fn load_str(&mut self, content: &str, path: &Path) -> Result<(), ConfigError> {
        let config: CatalogFileConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e,
            path: path.to_path_buf(),
        })?;

        for entry in config.entries {
            let id = entry.id;
            let template = entry.into_template().map_err(|reason| ConfigError::InvalidEntry {
                id,
                reason,
                path: path.to_path_buf(),
            })?;
            if self.entries.contains_key(&id) {
                return Err(ConfigError::DuplicateId {
                    id,
                    path: path.to_path_buf(),
                });
            }
            self.insert(template);
        }

        Ok(())
    }

    /// Add or replace a template
    pub fn insert(&mut self, template: EntityTemplate) {
        self.entries.insert(template.id, template);
    }

    /// Get a template by id
    pub fn get(&self, id: u32) -> Option<&EntityTemplate> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all templates in id order
    pub fn iter(&self) -> impl Iterator<Item = &EntityTemplate> {
        self.entries.values()
    }

    /// List templates matching `search`, ordered by `sort`
    pub fn filter_and_sort(&self, search: &SearchParams, sort: SortKey) -> Vec<&EntityTemplate> {
        let mut matches: Vec<&EntityTemplate> = self.iter().filter(|t| search.matches(t)).collect();
        matches.sort_by(|a, b| sort.compare(a, b));
        matches
    }

    /// Heroes a requester may pick, in id order
    pub fn hero_select(&self, tiers: &AccessTiers) -> Vec<&EntityTemplate> {
        self.iter()
            .filter(|t| t.category == Category::Hero)
            .filter(|t| tiers.contains(t.access_tier()))
            .collect()
    }

    /// Templates eligible for a random draw, in id order
    pub fn eligible(&self, category: Category, tiers: &AccessTiers, level: u32) -> Vec<&EntityTemplate> {
        self.iter()
            .filter(|t| t.category == category)
            .filter(|t| tiers.contains(t.access_tier()))
            .filter(|t| t.unlocked_at(level))
            .collect()
    }
}

impl Catalog for CodexCatalog {
    fn find_random<R: RandomSource>(
        &self,
        category: Category,
        tiers: &AccessTiers,
        level: u32,
        rng: &mut R,
    ) -> Result<EntityTemplate, CodexError> {
        let candidates = self
            .eligible(category, tiers, level)
            .into_iter()
            .cloned()
            .collect();
        pick_uniform(candidates, category, level, rng)
    }
}
