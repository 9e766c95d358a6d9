//! Error types.
//!
//! Lookups that miss (unknown enemy id, empty pool) are not errors; they
//! return `None`. Only collaborator failures surface here.

use std::path::PathBuf;

use thiserror::Error;

/// Failure fetching or decoding the enemy catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog source unavailable: {0}")]
    Unavailable(String),

    #[error("malformed catalog: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Malformed(err.to_string())
    }
}

/// Invalid engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
