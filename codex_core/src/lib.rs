//! codex_core - Procedural generation for the game codex
//!
//! This library provides:
//! - RarityResolver: weapon rarity from successive upgrade rolls
//! - StatMultiplier: level and rarity scaled stat boosts
//! - Generator: random weapons and enemies spawned from catalog templates
//! - Catalog: the seam to whatever stores the templates
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use codex_core::{AccessTiers, Generator, RngSource};
//! use catalog_core::CodexCatalog;
//!
//! let catalog = CodexCatalog::load(Path::new("config/codex")).unwrap();
//! let generator = Generator::new(catalog);
//! let mut rng = RngSource::from_entropy();
//!
//! let weapon = generator
//!     .generate_weapon(&AccessTiers::for_requester(true), 4, &mut rng)
//!     .unwrap();
//! println!("{}", weapon);
//! ```

mod catalog;
pub mod config;
mod entry;
mod generator;
pub mod multiplier;
pub mod random;
pub mod rarity;
pub mod types;

pub use catalog::{pick_uniform, Catalog};
pub use config::GenerationConfig;
pub use entry::{EntityTemplate, GeneratedInstance};
pub use generator::Generator;
pub use multiplier::StatMultiplier;
pub use random::{RandomSource, RngSource, ScriptedSource};
pub use rarity::RarityResolver;
pub use types::{AccessTier, AccessTiers, Category, Rarity, Stats, MAX_RARITY};

use thiserror::Error;

/// Error generating a codex entry
#[derive(Debug, Error)]
pub enum CodexError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("No {category} available at level {level}")]
    NotFound { category: Category, level: u32 },
}
