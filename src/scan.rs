//! Scan pipeline: Walk → Hash → Sort → Serialize → Write
//!
//! Runs strictly in sequence on the calling thread. Files that cannot be read
//! are logged and left out; a missing root or an unwritable manifest ends the
//! run with an error.

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::manifest::{Manifest, ManifestBuilder, ManifestDiff};
use crate::tree::hasher::FileHasher;
use crate::tree::path;
use crate::tree::walker::{WalkEntry, Walker};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, instrument, trace, warn};

/// A file left out of the manifest, and why
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    pub relative_path: String,
    pub reason: String,
}

/// Result of walking and hashing a tree
#[derive(Debug, Clone)]
pub struct ScanReport {
    pub manifest: Manifest,
    pub skipped: Vec<SkippedFile>,
}

/// Result of a full run that wrote the manifest
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub scan: ScanReport,
}

/// Result of comparing a fresh scan with an existing manifest
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub diff: ManifestDiff,
    pub skipped: Vec<SkippedFile>,
}

impl VerifyReport {
    /// No drift; unreadable files do not count
    pub fn is_clean(&self) -> bool {
        self.diff.is_clean()
    }
}

/// Scans one root with one configuration
pub struct Scanner {
    root: PathBuf,
    config: ScanConfig,
    hasher: FileHasher,
}

impl Scanner {
    /// Resolve the root and prepare a scanner
    ///
    /// Fails before anything is read if the root is missing or not a directory.
    pub fn new(root: &Path, config: ScanConfig) -> Result<Self, ScanError> {
        let root = path::resolve_root(root)?;
        let hasher = config.hasher();
        Ok(Self {
            root,
            config,
            hasher,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Where the manifest is written
    pub fn output_path(&self) -> PathBuf {
        self.config.resolve_output(&self.root)
    }

    /// A fresh walker over the root
    pub fn walker(&self) -> Walker {
        Walker::with_config(self.root.clone(), self.config.walker_config())
    }

    /// Walk and hash the tree without writing anything
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let start = Instant::now();
        info!("Starting scan");

        let walker = self.walker();
        let report = self.hash_entries(walker.entries())?;

        info!(
            file_count = report.manifest.len(),
            skipped_count = report.skipped.len(),
            duration_ms = start.elapsed().as_millis(),
            "Scan completed"
        );
        Ok(report)
    }

    /// Hash every entry of a walk and build the sorted manifest
    ///
    /// Recoverable errors (unreadable files, unreadable subdirectories) are
    /// logged and collected in [`ScanReport::skipped`]. Any other error is
    /// returned immediately.
    pub fn hash_entries<I>(&self, entries: I) -> Result<ScanReport, ScanError>
    where
        I: IntoIterator<Item = Result<WalkEntry, ScanError>>,
    {
        let mut builder = ManifestBuilder::new();
        let mut skipped = Vec::new();

        for item in entries {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) if err.is_recoverable() => {
                    let relative_path = self.describe_error_path(&err);
                    warn!(path = %relative_path, error = %err, "Skipping unreadable path");
                    skipped.push(SkippedFile {
                        relative_path,
                        reason: err.to_string(),
                    });
                    continue;
                }
                Err(err) => return Err(err),
            };

            match self.hasher.hash_file(&entry.path) {
                Ok(hash) => {
                    trace!(path = %entry.relative_path, "Hashed file");
                    builder.add_entry(&entry, &hash);
                }
                Err(err) => {
                    warn!(path = %entry.relative_path, error = %err, "Skipping unreadable file");
                    skipped.push(SkippedFile {
                        relative_path: entry.relative_path,
                        reason: source_message(&err),
                    });
                }
            }
        }

        debug!(records = builder.len(), "Sorting manifest");
        Ok(ScanReport {
            manifest: builder.finish(),
            skipped,
        })
    }

    /// Scan the tree and write the manifest
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn generate(&self) -> Result<GenerateReport, ScanError> {
        let scan = self.scan()?;
        let output = self.output_path();

        scan.manifest.write_to(&output)?;
        info!(
            output = %output.display(),
            records = scan.manifest.len(),
            "Manifest written"
        );

        Ok(GenerateReport { output, scan })
    }

    /// Rescan the tree and compare it with `expected`
    #[instrument(skip(self, expected), fields(root = %self.root.display()))]
    pub fn verify(&self, expected: &Manifest) -> Result<VerifyReport, ScanError> {
        let walker = self.walker();
        self.verify_entries(expected, walker.entries())
    }

    /// Hash the given entries and diff them against `expected`
    ///
    /// Paths that could not be read are reported in
    /// [`VerifyReport::skipped`] only, never as removed or modified.
    pub fn verify_entries<I>(
        &self,
        expected: &Manifest,
        entries: I,
    ) -> Result<VerifyReport, ScanError>
    where
        I: IntoIterator<Item = Result<WalkEntry, ScanError>>,
    {
        let scan = self.hash_entries(entries)?;
        let diff = ManifestDiff::between(expected, &scan.manifest)
            .ignoring(scan.skipped.iter().map(|s| s.relative_path.as_str()));

        info!(
            changes = diff.change_count(),
            skipped_count = scan.skipped.len(),
            "Verification completed"
        );
        Ok(VerifyReport {
            diff,
            skipped: scan.skipped,
        })
    }

    fn describe_error_path(&self, err: &ScanError) -> String {
        let full = match err {
            ScanError::FileRead { path, .. } | ScanError::Walk { path, .. } => path.as_path(),
            _ => return String::new(),
        };
        match full.strip_prefix(&self.root) {
            Ok(relative) => path::to_manifest_path(relative),
            Err(_) => path::normalize_separators(&full.to_string_lossy()),
        }
    }
}

/// The underlying I/O message for read failures, the full message otherwise
fn source_message(err: &ScanError) -> String {
    match err {
        ScanError::FileRead { source, .. } => source.to_string(),
        other => other.to_string(),
    }
}
