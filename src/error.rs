//! Error types for storage, the favourites store and catalogue loading
//!
//! The component layer and the binary use `anyhow::Result`; these typed
//! errors are what the lower layers hand back to them.

use std::io;

/// Failure of the key-value storage backend itself
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// The backing file exists but is not a JSON object of strings
    #[error("Storage file is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),
}

/// Errors raised by the favourites store
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The persisted favourites value could not be parsed
    #[error("Persisted favourites are malformed: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("Failed to encode favourites: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors raised while loading a show catalogue
#[derive(thiserror::Error, Debug)]
pub enum CatalogueError {
    #[error("Failed to read catalogue: {0}")]
    Read(#[from] io::Error),

    #[error("Failed to parse JSON catalogue: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML catalogue: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported catalogue format: {0}")]
    UnsupportedFormat(String),
}
