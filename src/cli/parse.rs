//! CLI parse: clap types for repohash. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// repohash - deterministic SHA-256 manifests for repository snapshots
#[derive(Parser, Debug)]
#[command(name = "repohash", version)]
#[command(about = "Hash every file under a directory into a sorted JSON manifest")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Scan root directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Manifest path; relative paths resolve against the root
    #[arg(long, short, global = true)]
    pub output: Option<PathBuf>,

    /// Additional directory name to exclude (repeatable)
    #[arg(long = "exclude-dir", value_name = "NAME", global = true)]
    pub exclude_dirs: Vec<String>,

    /// Do not exclude .git, .scripts and .github
    #[arg(long, global = true)]
    pub no_default_excludes: bool,

    /// Bytes read per hash update
    #[arg(long, global = true)]
    pub chunk_size: Option<usize>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,
}

impl Cli {
    /// The requested command; generating the manifest when none was given
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Generate)
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Scan the root and write the manifest
    Generate,
    /// Rescan the root and compare it with the existing manifest
    Verify {
        /// Report format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Save it to repohash.toml in the root
        #[arg(long)]
        write: bool,
        /// Overwrite an existing repohash.toml
        #[arg(long, requires = "write")]
        force: bool,
    },
}
