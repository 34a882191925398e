//! Manifest model and JSON codec
//!
//! A manifest is the sorted list of [`FileRecord`]s for one scan. It is
//! serialized as a JSON array with 2-space indentation and literal non-ASCII
//! text, so identical trees always produce identical bytes.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;

mod builder;
mod diff;

pub use builder::ManifestBuilder;
pub use diff::{ManifestDiff, ModifiedEntry};

/// One hashed file
///
/// Field order and names are part of the output format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Base file name (not unique across the tree)
    #[serde(rename = "Name")]
    pub name: String,

    /// Lowercase hex SHA-256 of the file content
    #[serde(rename = "SHA256")]
    pub hash: String,

    /// Root-relative path with `/` separators
    #[serde(rename = "RelativePath")]
    pub relative_path: String,
}

/// Records ordered by relative path, byte-wise
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    records: Vec<FileRecord>,
}

impl Manifest {
    /// Build a manifest from records in any order
    pub fn from_records(mut records: Vec<FileRecord>) -> Self {
        // String's Ord compares UTF-8 bytes, independent of locale
        records.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        Self { records }
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its relative path
    pub fn get(&self, relative_path: &str) -> Option<&FileRecord> {
        self.records
            .binary_search_by(|r| r.relative_path.as_str().cmp(relative_path))
            .ok()
            .map(|i| &self.records[i])
    }

    /// Relative paths held by more than one record, in order
    ///
    /// Distinct on-disk names can collide once they are rendered: lossy
    /// conversion of non-UTF-8 bytes, or a literal backslash in a Unix name.
    pub fn duplicate_paths(&self) -> Vec<&str> {
        let mut duplicates: Vec<&str> = self
            .records
            .windows(2)
            .filter(|pair| pair[0].relative_path == pair[1].relative_path)
            .map(|pair| pair[0].relative_path.as_str())
            .collect();
        duplicates.dedup();
        duplicates
    }

    /// Serialize to the manifest JSON format
    pub fn to_json(&self) -> Result<String, ScanError> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    /// Parse manifest JSON; records are re-sorted
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<FileRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load a manifest previously written to disk
    pub fn load(path: &Path) -> Result<Self, ScanError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ScanError::ManifestRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_json(&contents).map_err(|e| ScanError::ManifestRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Write the manifest, replacing any existing file
    ///
    /// The JSON is fully built first, written to a temporary file next to
    /// `path`, then renamed over it. Readers see either the old manifest or
    /// the complete new one.
    pub fn write_to(&self, path: &Path) -> Result<(), ScanError> {
        let json = self.to_json()?;
        write_atomic(path, json.as_bytes())
    }
}

fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), ScanError> {
    let write_error = |source| ScanError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(".repohash-")
        .suffix(".tmp")
        .tempfile_in(parent)
        .map_err(write_error)?;
    temp.write_all(contents).map_err(write_error)?;
    temp.as_file().sync_all().map_err(write_error)?;

    let permissions = match std::fs::metadata(path) {
        Ok(existing) => existing.permissions(),
        Err(_) => default_permissions(temp.as_file()).map_err(write_error)?,
    };
    temp.as_file()
        .set_permissions(permissions)
        .map_err(write_error)?;

    temp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

#[cfg(unix)]
fn default_permissions(_file: &std::fs::File) -> std::io::Result<std::fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(std::fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(file: &std::fs::File) -> std::io::Result<std::fs::Permissions> {
    Ok(file.metadata()?.permissions())
}
