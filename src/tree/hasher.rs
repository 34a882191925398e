//! Content hashing for manifest entries using SHA-256

use crate::error::ScanError;
use crate::types::Hash;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

/// Read size used when none is configured
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Streaming file hasher
///
/// The digest depends only on file content; the chunk size only bounds how
/// much is held in memory at once.
#[derive(Debug, Clone)]
pub struct FileHasher {
    chunk_size: usize,
}

impl Default for FileHasher {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl FileHasher {
    /// Create a hasher reading `chunk_size` bytes at a time (zero falls back to the default)
    pub fn new(chunk_size: usize) -> Self {
        Self {
            chunk_size: if chunk_size == 0 {
                DEFAULT_CHUNK_SIZE
            } else {
                chunk_size
            },
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Hash the full content of a file
    ///
    /// The file is opened read-only and closed before returning on every path.
    pub fn hash_file(&self, path: &Path) -> Result<Hash, ScanError> {
        let read_error = |source| ScanError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(read_error)?;
        self.hash_reader(&mut file).map_err(read_error)
    }

    /// Hash everything a reader yields until EOF
    pub fn hash_reader<R: Read>(&self, reader: &mut R) -> std::io::Result<Hash> {
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buffer[..read]);
        }

        Ok(hasher.finalize().into())
    }
}

/// Compute content hash for in-memory bytes
pub fn hash_bytes(content: &[u8]) -> Hash {
    Sha256::digest(content).into()
}
