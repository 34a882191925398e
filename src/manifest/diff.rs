//! Comparison of an expected manifest against a fresh scan

use crate::manifest::{FileRecord, Manifest};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A path whose content hash changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModifiedEntry {
    pub relative_path: String,
    pub expected: String,
    pub actual: String,
}

/// Differences between two manifests, each list sorted by path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ManifestDiff {
    /// Only in the actual tree
    pub added: Vec<String>,
    /// Only in the expected manifest
    pub removed: Vec<String>,
    /// In both, with different hashes
    pub modified: Vec<ModifiedEntry>,
}

impl ManifestDiff {
    /// Merge-walk two sorted manifests
    pub fn between(expected: &Manifest, actual: &Manifest) -> Self {
        let mut diff = ManifestDiff::default();
        let mut exp = expected.records().iter().peekable();
        let mut act = actual.records().iter().peekable();

        loop {
            match (exp.peek().copied(), act.peek().copied()) {
                (Some(e), Some(a)) => match e.relative_path.cmp(&a.relative_path) {
                    Ordering::Less => {
                        diff.removed.push(e.relative_path.clone());
                        exp.next();
                    }
                    Ordering::Greater => {
                        diff.added.push(a.relative_path.clone());
                        act.next();
                    }
                    Ordering::Equal => {
                        diff.compare(e, a);
                        exp.next();
                        act.next();
                    }
                },
                (Some(e), None) => {
                    diff.removed.push(e.relative_path.clone());
                    exp.next();
                }
                (None, Some(a)) => {
                    diff.added.push(a.relative_path.clone());
                    act.next();
                }
                (None, None) => break,
            }
        }

        diff
    }

    /// Drop paths that could not be read on the actual side
    ///
    /// An unreadable file is absent from a fresh scan, which would otherwise
    /// show up as removed. A skipped directory covers everything below it.
    pub fn ignoring<'a, I>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ignored: BTreeSet<&str> = paths.into_iter().collect();
        if ignored.is_empty() {
            return self;
        }
        let keep = |path: &str| !is_covered(path, &ignored);
        self.added.retain(|p| keep(p.as_str()));
        self.removed.retain(|p| keep(p.as_str()));
        self.modified.retain(|m| keep(m.relative_path.as_str()));
        self
    }

    fn compare(&mut self, expected: &FileRecord, actual: &FileRecord) {
        // Hex case is not significant for hand-edited manifests
        if !expected.hash.eq_ignore_ascii_case(&actual.hash) {
            self.modified.push(ModifiedEntry {
                relative_path: expected.relative_path.clone(),
                expected: expected.hash.clone(),
                actual: actual.hash.clone(),
            });
        }
    }

    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    pub fn change_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len()
    }
}

fn is_covered(path: &str, ignored: &BTreeSet<&str>) -> bool {
    ignored.iter().any(|skipped| {
        path == *skipped
            || (path.starts_with(*skipped) && path.as_bytes().get(skipped.len()) == Some(&b'/'))
    })
}
