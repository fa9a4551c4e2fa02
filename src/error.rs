use std::path::PathBuf;

use thiserror::Error;

use crate::movie::DraftField;

/// Message shown when a commit is rejected.
pub const INCOMPLETE_DRAFT_MESSAGE: &str = "Please fill in every field before adding a movie.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// One or more required text fields were blank after trimming.
    #[error("Please fill in every field before adding a movie.")]
    IncompleteDraft { missing: Vec<DraftField> },
    #[error("unknown draft field: {0}")]
    UnknownField(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid seed movie #{index}: {reason}")]
    InvalidSeed { index: usize, reason: String },
    #[error("duplicate seed movie id: {0}")]
    DuplicateSeedId(String),
}
