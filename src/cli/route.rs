//! CLI route: single route table and run context. Dispatches to the scanner and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Cli, Commands};
use crate::cli::presentation;
use crate::config::sources::workspace_file::workspace_config_path;
use crate::config::{ConfigLoader, RepohashConfig};
use crate::error::CliError;
use crate::manifest::Manifest;
use crate::scan::Scanner;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, info, info_span};

/// What a command printed and whether it succeeded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub output: String,
    pub success: bool,
}

impl CommandOutcome {
    fn ok(output: String) -> Self {
        Self {
            output,
            success: true,
        }
    }
}

/// Runtime context for CLI execution: scan root and effective configuration.
pub struct RunContext {
    root: PathBuf,
    config: RepohashConfig,
}

impl RunContext {
    /// Load configuration for the CLI's root and apply flag overrides.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mut config = match cli.config {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&cli.root)?,
        };
        apply_scan_overrides(&mut config, cli);
        config.validate().map_err(|errors| {
            let msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CliError::InvalidArgument(msgs.join("; "))
        })?;

        Ok(Self::new(cli.root.clone(), config))
    }

    pub fn new(root: PathBuf, config: RepohashConfig) -> Self {
        Self { root, config }
    }

    pub fn config(&self) -> &RepohashConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutcome, CliError> {
        let span = info_span!("command", name = command_name(command));
        let _guard = span.enter();
        let started = Instant::now();

        let result = match command {
            Commands::Generate => self.generate(),
            Commands::Verify { format } => self.verify(format),
            Commands::Config { write, force } => self.show_config(*write, *force),
        };

        info!(
            duration_ms = started.elapsed().as_millis(),
            ok = result.is_ok(),
            "Command finished"
        );
        result
    }

    fn scanner(&self) -> Result<Scanner, CliError> {
        Ok(Scanner::new(&self.root, self.config.scan.clone())?)
    }

    fn generate(&self) -> Result<CommandOutcome, CliError> {
        let report = self.scanner()?.generate()?;
        Ok(CommandOutcome::ok(presentation::format_generate_summary(
            &report,
        )))
    }

    fn verify(&self, format: &str) -> Result<CommandOutcome, CliError> {
        if format != "text" && format != "json" {
            return Err(CliError::InvalidArgument(format!(
                "Invalid format: {} (must be 'text' or 'json')",
                format
            )));
        }

        let scanner = self.scanner()?;
        let manifest_path = scanner.output_path();
        let expected = Manifest::load(&manifest_path)?;
        debug!(records = expected.len(), "Loaded manifest for verification");

        let report = scanner.verify(&expected)?;

        let output = if format == "json" {
            presentation::format_verify_json(&manifest_path, &report.diff, &report.skipped)?
        } else {
            let color = std::io::stdout().is_terminal();
            presentation::format_verify_text(&manifest_path, &report.diff, &report.skipped, color)
        };

        Ok(CommandOutcome {
            output,
            success: report.is_clean(),
        })
    }

    fn show_config(&self, write: bool, force: bool) -> Result<CommandOutcome, CliError> {
        let rendered = self
            .config
            .to_toml()
            .map_err(|e| CliError::ConfigError(format!("Failed to render config: {}", e)))?;

        if !write {
            return Ok(CommandOutcome::ok(rendered.trim_end().to_string()));
        }

        let path = workspace_config_path(&self.root);
        if path.exists() && !force {
            return Err(CliError::InvalidArgument(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }
        std::fs::write(&path, &rendered).map_err(|e| {
            CliError::ConfigError(format!("Failed to write {}: {}", path.display(), e))
        })?;

        Ok(CommandOutcome::ok(format!(
            "Wrote configuration to {}",
            path.display()
        )))
    }
}

/// Fold scan-related CLI flags into the loaded configuration.
fn apply_scan_overrides(config: &mut RepohashConfig, cli: &Cli) {
    if let Some(ref output) = cli.output {
        config.scan.output = output.clone();
    }
    if cli.no_default_excludes {
        config.scan.exclude_dirs.clear();
    }
    for dir in &cli.exclude_dirs {
        if !config.scan.exclude_dirs.contains(dir) {
            config.scan.exclude_dirs.push(dir.clone());
        }
    }
    if let Some(chunk_size) = cli.chunk_size {
        config.scan.chunk_size = chunk_size;
    }
}
