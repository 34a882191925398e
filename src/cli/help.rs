//! Command-name contract for logging spans.

use crate::cli::parse::Commands;

/// Stable command name (e.g. "generate", "verify").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate => "generate",
        Commands::Verify { .. } => "verify",
        Commands::Config { .. } => "config",
    }
}
