//! Error types for repository scanning and manifest handling.

use std::path::PathBuf;
use thiserror::Error;

/// Scan, hash, and manifest I/O errors
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("Scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Scan root cannot be read: {}: {message}", .path.display())]
    RootUnreadable { path: PathBuf, message: String },

    #[error("Failed to walk {}: {message}", .path.display())]
    Walk { path: PathBuf, message: String },

    #[error("Failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read manifest {}: {message}", .path.display())]
    ManifestRead { path: PathBuf, message: String },

    #[error("Manifest serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScanError {
    /// Per-entry failures are logged and skipped; everything else ends the run.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ScanError::FileRead { .. } | ScanError::Walk { .. })
    }
}

/// Errors surfaced by the CLI and configuration layers
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("{0}")]
    ScanError(#[from] ScanError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}
