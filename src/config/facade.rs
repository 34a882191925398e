//! Single entry point for loading configuration.

use crate::config::merge::builder_with_defaults;
use crate::config::sources::{environment, global_file, workspace_file};
use crate::config::RepohashConfig;
use crate::error::CliError;
use config::File;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a scan root from all sources.
    pub fn load(root: &Path) -> Result<RepohashConfig, CliError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, root)?;
        let builder = environment::add_to_builder(builder)?;

        let config: RepohashConfig = builder.build()?.try_deserialize()?;
        debug!(root = %root.display(), "Configuration loaded");
        Self::validated(config)
    }

    /// Load configuration from one explicit file (plus defaults and environment).
    pub fn load_from_file(path: &Path) -> Result<RepohashConfig, CliError> {
        if !path.is_file() {
            return Err(CliError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder)?;

        let config: RepohashConfig = builder.build()?.try_deserialize()?;
        debug!(config_path = %path.display(), "Configuration loaded from file");
        Self::validated(config)
    }

    /// Built-in defaults with no files or environment applied.
    pub fn default() -> RepohashConfig {
        RepohashConfig::default()
    }

    fn validated(config: RepohashConfig) -> Result<RepohashConfig, CliError> {
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CliError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
