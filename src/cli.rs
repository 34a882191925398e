//! CLI domain: parse, route, help, output, and presentation only.
//! No scanning logic; the route table dispatches to the scanner.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{format_generate_summary, format_verify_json, format_verify_text};
pub use route::{CommandOutcome, RunContext};
