mod config;
mod query;
mod registry;

pub use config::MIN_LEVEL_RANGE;
pub use query::{SearchParams, SortField, SortKey};
pub use registry::CodexCatalog;

use std::path::PathBuf;
use thiserror::Error;

/// Error loading codex catalog files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read codex file {path:?}: {error}")]
    Io {
        error: std::io::Error,
        path: Option<PathBuf>,
    },
    #[error("malformed codex file '{}': {error}", path.display())]
    Parse {
        error: toml::de::Error,
        path: PathBuf,
    },
    /// A row whose stats or unlock level are out of range
    #[error("codex entry {id} in '{}' {reason}", path.display())]
    InvalidEntry {
        id: u32,
        reason: String,
        path: PathBuf,
    },
    /// Two rows share an id, possibly across files
    #[error("codex entry id {id} in '{}' is already taken", path.display())]
    DuplicateId { id: u32, path: PathBuf },
}
