//! Merge rules: defaults, override order, conflict handling.

use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use crate::tree::walker::DEFAULT_EXCLUDE_DIRS;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Default manifest file name
pub const DEFAULT_OUTPUT: &str = "hashes.json";

/// Create a Config builder with merge policy defaults applied.
///
/// Sources added afterwards override these in the order they are added.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("scan.output", DEFAULT_OUTPUT)?
        .set_default("scan.exclude_dirs", DEFAULT_EXCLUDE_DIRS.to_vec())?
        .set_default("scan.exclude_files", Vec::<String>::new())?
        .set_default("scan.chunk_size", DEFAULT_CHUNK_SIZE as i64)
}
