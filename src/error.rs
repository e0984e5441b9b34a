//! Error types
//!
//! Every failure here is terminal for the session: there is no retry or
//! degraded mode.

use std::path::PathBuf;

use thiserror::Error;

/// Startup asset failure
#[derive(Debug, Error)]
pub enum AssetError {
    /// Required file does not exist
    #[error("Asset not found: {name} ({path:?})")]
    Missing { name: &'static str, path: PathBuf },

    /// File exists but could not be opened or decoded
    #[error("Failed to load asset {name}: {reason}")]
    Unreadable { name: &'static str, reason: String },
}

/// Entity store precondition violation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Entity index {index} out of bounds (len {len})")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Invalid layout configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Top-level startup error
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
