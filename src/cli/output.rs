//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{CliError, ScanError};

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &CliError) -> String {
    match e {
        CliError::ScanError(ScanError::RootNotFound(path)) => format!(
            "error: scan root {} does not exist (pass --root to choose another directory)",
            path.display()
        ),
        CliError::ScanError(ScanError::ManifestRead { path, message }) => format!(
            "error: cannot read manifest {}: {} (run `repohash generate` first)",
            path.display(),
            message
        ),
        other => format!("error: {}", other),
    }
}
