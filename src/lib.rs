//! Repohash: Deterministic Repository Manifests
//!
//! Walks a directory tree, hashes every regular file with SHA-256, and writes
//! a sorted JSON manifest that can later be used to detect tampering or drift.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod scan;
pub mod tree;
pub mod types;

pub use error::{CliError, ScanError};
pub use manifest::{FileRecord, Manifest, ManifestDiff};
pub use scan::{ScanReport, Scanner, VerifyReport};
