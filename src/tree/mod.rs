//! Filesystem traversal and hashing
//!
//! Walks the scan root, filters out excluded entries, and hashes each
//! remaining regular file.

pub mod hasher;
pub mod path;
pub mod walker;
