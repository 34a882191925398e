//! Scan settings: output manifest, exclusions, read chunk size

use crate::config::merge::DEFAULT_OUTPUT;
use crate::tree::hasher::{FileHasher, DEFAULT_CHUNK_SIZE};
use crate::tree::path::file_name_string;
use crate::tree::walker::{WalkerConfig, DEFAULT_EXCLUDE_DIRS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Manifest path; relative paths resolve against the scan root
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Directory names whose subtrees are never hashed
    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,

    /// Extra file names skipped at any depth
    #[serde(default)]
    pub exclude_files: Vec<String>,

    /// Bytes read per hash update
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_exclude_dirs() -> Vec<String> {
    DEFAULT_EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            output: default_output(),
            exclude_dirs: default_exclude_dirs(),
            exclude_files: Vec::new(),
            chunk_size: default_chunk_size(),
        }
    }
}

impl ScanConfig {
    /// Validate scan configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be greater than zero".to_string());
        }
        if self.output_file_name().is_empty() {
            return Err(format!(
                "output {:?} does not name a file",
                self.output.display().to_string()
            ));
        }
        for name in self.exclude_dirs.iter().chain(self.exclude_files.iter()) {
            if name.is_empty() || name.contains('/') || name.contains('\\') {
                return Err(format!(
                    "exclusion {:?} must be a single path segment",
                    name
                ));
            }
        }
        Ok(())
    }

    /// Base name of the manifest, skipped wherever it appears in the tree
    pub fn output_file_name(&self) -> String {
        file_name_string(&self.output)
    }

    /// Absolute manifest location for a scan root
    pub fn resolve_output(&self, root: &Path) -> PathBuf {
        if self.output.is_absolute() {
            self.output.clone()
        } else {
            root.join(&self.output)
        }
    }

    /// Walker filters, with the manifest's own name always excluded
    pub fn walker_config(&self) -> WalkerConfig {
        let mut exclude_files = self.exclude_files.clone();
        let output_name = self.output_file_name();
        if !exclude_files.contains(&output_name) {
            exclude_files.push(output_name);
        }
        WalkerConfig {
            exclude_dirs: self.exclude_dirs.clone(),
            exclude_files,
        }
    }

    pub fn hasher(&self) -> FileHasher {
        FileHasher::new(self.chunk_size)
    }
}
