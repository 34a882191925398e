//! Filesystem walker for traversing directory structures

use crate::error::ScanError;
use crate::tree::path;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory names skipped by default: VCS metadata, tooling scripts, CI config
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[".git", ".scripts", ".github"];

/// A regular file that survived filtering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    /// Absolute path used for reading
    pub path: PathBuf,
    /// Root-relative path with `/` separators
    pub relative_path: String,
    /// Base file name
    pub name: String,
}

/// Filesystem walker configuration
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Path segments whose subtrees are skipped entirely
    pub exclude_dirs: Vec<String>,
    /// File names skipped at any depth (always holds the manifest's own name)
    pub exclude_files: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            exclude_dirs: DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect(),
            exclude_files: Vec::new(),
        }
    }
}

impl WalkerConfig {
    fn is_excluded_dir(&self, name: &OsStr) -> bool {
        matches_any(name, &self.exclude_dirs)
    }

    fn is_excluded_file(&self, name: &OsStr) -> bool {
        matches_any(name, &self.exclude_files)
    }
}

fn matches_any(name: &OsStr, names: &[String]) -> bool {
    match name.to_str() {
        Some(name) => names.iter().any(|n| n == name),
        None => false,
    }
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a fresh traversal
    ///
    /// The returned iterator is lazy and single-use. Entries arrive in
    /// filesystem order, which callers must not rely on.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: WalkDir::new(&self.root).follow_links(false).into_iter(),
            walker: self,
        }
    }
}

/// Lazy sequence of filtered regular files below a root
pub struct Entries<'a> {
    inner: walkdir::IntoIter,
    walker: &'a Walker,
}

impl Entries<'_> {
    fn accept(&mut self, entry: DirEntry) -> Option<Result<WalkEntry, ScanError>> {
        // The root itself is never a candidate
        if entry.depth() == 0 {
            return None;
        }

        let config = &self.walker.config;

        if config.is_excluded_dir(entry.file_name()) {
            if entry.file_type().is_dir() {
                self.inner.skip_current_dir();
            }
            return None;
        }

        if !is_regular_file(&entry) {
            return None;
        }

        if config.is_excluded_file(entry.file_name()) {
            return None;
        }

        let relative = match entry.path().strip_prefix(&self.walker.root) {
            Ok(relative) => relative,
            Err(e) => {
                return Some(Err(ScanError::Walk {
                    path: entry.path().to_path_buf(),
                    message: e.to_string(),
                }))
            }
        };

        Some(Ok(WalkEntry {
            relative_path: path::to_manifest_path(relative),
            name: path::file_name_string(entry.path()),
            path: entry.into_path(),
        }))
    }

    fn convert_error(&self, err: walkdir::Error) -> ScanError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.walker.root.clone());
        if err.depth() == 0 {
            ScanError::RootUnreadable {
                path,
                message: err.to_string(),
            }
        } else {
            ScanError::Walk {
                path,
                message: err.to_string(),
            }
        }
    }
}

impl Iterator for Entries<'_> {
    type Item = Result<WalkEntry, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => return Some(Err(self.convert_error(err))),
            };
            if let Some(item) = self.accept(entry) {
                return Some(item);
            }
        }
    }
}

/// Regular files, plus symlinks whose target is a regular file
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        return std::fs::metadata(entry.path())
            .map(|m| m.is_file())
            .unwrap_or(false);
    }
    false
}
