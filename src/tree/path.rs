//! Path resolution and normalization utilities

use crate::error::ScanError;
use std::path::{Component, Path, PathBuf};

/// Resolve the scan root to an absolute directory path
///
/// Fails before any walking happens when the root is missing, is not a
/// directory, or cannot be canonicalized.
pub fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let metadata = match std::fs::metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }
        Err(e) => {
            return Err(ScanError::RootUnreadable {
                path: root.to_path_buf(),
                message: e.to_string(),
            });
        }
    };

    if !metadata.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    // dunce keeps Windows paths free of the \\?\ prefix
    dunce::canonicalize(root).map_err(|e| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        message: e.to_string(),
    })
}

/// Render a root-relative path the way manifests store it
///
/// Components are joined with `/` on every platform. Backslashes left inside
/// a component are rewritten too, so the result never contains one.
/// Non-UTF-8 names are converted lossily.
pub fn to_manifest_path(relative: &Path) -> String {
    let joined = relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    normalize_separators(&joined)
}

/// Replace every backslash with a forward slash
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Base name of a path, lossily converted
pub fn file_name_string(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
