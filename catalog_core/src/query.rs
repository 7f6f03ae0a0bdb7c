use codex_core::{AccessTier, Category, EntityTemplate};
use std::cmp::Ordering;

/// Filters for listing the codex
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Only entries of this tier
    pub access: Option<AccessTier>,
    /// Only entries of this category
    pub category: Option<Category>,
    /// Only entries whose `min_level` is one of these.
    /// Ignored when listing heroes.
    pub levels: Option<Vec<u32>>,
}

impl SearchParams {
    pub fn matches(&self, template: &EntityTemplate) -> bool {
        if let Some(access) = self.access {
            if template.access_tier() != access {
                return false;
            }
        }
        if let Some(category) = self.category {
            if template.category != category {
                return false;
            }
        }
        if let Some(ref levels) = self.levels {
            if self.category != Some(Category::Hero) {
                match template.min_level {
                    Some(level) if levels.contains(&level) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

/// Column to order a listing by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Id,
    Name,
    Category,
    Hp,
    Attack,
    Defense,
    Speed,
}

/// Listing order; ties always fall back to ascending id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortKey {
    pub field: SortField,
    pub descending: bool,
}

impl SortKey {
    pub fn ascending(field: SortField) -> Self {
        SortKey {
            field,
            descending: false,
        }
    }

    pub fn descending(field: SortField) -> Self {
        SortKey {
            field,
            descending: true,
        }
    }

    pub fn compare(&self, a: &EntityTemplate, b: &EntityTemplate) -> Ordering {
        let ordering = match self.field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Category => a.category.label().cmp(b.category.label()),
            SortField::Hp => a.stats.hp.cmp(&b.stats.hp),
            SortField::Attack => a.stats.attack.cmp(&b.stats.attack),
            SortField::Defense => a.stats.defense.cmp(&b.stats.defense),
            SortField::Speed => a.stats.speed.cmp(&b.stats.speed),
        };
        let ordering = if self.descending {
            ordering.reverse()
        } else {
            ordering
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    }
}
