use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading settings or persisting preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Storage or settings path could not be expanded or has no parent.
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    /// Settings or storage file is not valid TOML for its schema.
    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
    /// Storage contents could not be serialised.
    #[error("Failed to serialise storage: {0}")]
    Serialise(String),
    /// Atomic write operation failed.
    #[error("Atomic write failed: {0}")]
    WriteFailed(String),
    /// Generic I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
