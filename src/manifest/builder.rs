//! Accumulates records in arrival order and sorts them once on finish

use crate::manifest::{FileRecord, Manifest};
use crate::tree::walker::WalkEntry;
use crate::types::{hash_to_hex, Hash};
use tracing::warn;

#[derive(Debug, Default)]
pub struct ManifestBuilder {
    records: Vec<FileRecord>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: FileRecord) {
        self.records.push(record);
    }

    /// Record a hashed walk entry
    pub fn add_entry(&mut self, entry: &WalkEntry, hash: &Hash) {
        self.push(FileRecord {
            name: entry.name.clone(),
            hash: hash_to_hex(hash),
            relative_path: entry.relative_path.clone(),
        });
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sort by relative path and produce the manifest
    ///
    /// Records are never dropped; colliding paths are logged.
    pub fn finish(self) -> Manifest {
        let manifest = Manifest::from_records(self.records);
        for path in manifest.duplicate_paths() {
            warn!(path = %path, "Several files share one manifest path");
        }
        manifest
    }
}
