//! Core types for repository manifests.

/// Hash: SHA-256 digest of a file's full byte content
pub type Hash = [u8; 32];

/// Render a digest as the lowercase hex string stored in manifests.
pub fn hash_to_hex(hash: &Hash) -> String {
    hex::encode(hash)
}
