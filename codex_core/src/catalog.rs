use crate::entry::EntityTemplate;
use crate::random::RandomSource;
use crate::types::{AccessTiers, Category};
use crate::CodexError;

/// Read-only access to the codex templates.
///
/// Implementations own the storage; the generator only ever asks for one
/// random eligible template at a time.
pub trait Catalog {
    /// Pick one template uniformly among those of `category` whose access
    /// tier is in `tiers` and whose minimum level is at most `level`.
    ///
    /// Returns [`CodexError::NotFound`] when nothing is eligible.
    fn find_random<R: RandomSource>(
        &self,
        category: Category,
        tiers: &AccessTiers,
        level: u32,
        rng: &mut R,
    ) -> Result<EntityTemplate, CodexError>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn find_random<R: RandomSource>(
        &self,
        category: Category,
        tiers: &AccessTiers,
        level: u32,
        rng: &mut R,
    ) -> Result<EntityTemplate, CodexError> {
        (**self).find_random(category, tiers, level, rng)
    }
}

/// Select uniformly from an already filtered candidate list
pub fn pick_uniform<R: RandomSource>(
    mut candidates: Vec<EntityTemplate>,
    category: Category,
    level: u32,
    rng: &mut R,
) -> Result<EntityTemplate, CodexError> {
    if candidates.is_empty() {
        return Err(CodexError::NotFound { category, level });
    }
    let last = candidates.len() as i64 - 1;
    let index = rng.range_inclusive(0, last) as usize;
    Ok(candidates.swap_remove(index))
}
