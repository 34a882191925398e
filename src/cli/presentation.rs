//! CLI presentation: text and json formatters per command.

use crate::error::CliError;
use crate::manifest::ManifestDiff;
use crate::scan::{GenerateReport, SkippedFile};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

/// Completion message for `generate`: output file name and record count
pub fn format_generate_summary(report: &GenerateReport) -> String {
    let name = display_name(&report.output);
    let count = report.scan.manifest.len();
    let mut out = format!("Generated {} with {} {}", name, count, plural(count, "file"));
    if !report.scan.skipped.is_empty() {
        let skipped = report.scan.skipped.len();
        out.push_str(&format!(" ({} skipped)", skipped));
    }
    out.push('.');
    out
}

/// Human-readable verify report
pub fn format_verify_text(
    manifest_path: &Path,
    diff: &ManifestDiff,
    skipped: &[SkippedFile],
    color: bool,
) -> String {
    let name = display_name(manifest_path);
    let mut out = String::new();

    if diff.is_clean() {
        let line = format!("{} matches the tree.", name);
        out.push_str(&paint(&line, color, Paint::Ok));
    } else {
        let heading = format!(
            "{} differs from the tree: {} {}",
            name,
            diff.change_count(),
            plural(diff.change_count(), "change")
        );
        out.push_str(&paint(&heading, color, Paint::Heading));
        out.push_str("\n\n");

        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Status", "Path"]);
        for path in &diff.added {
            table.add_row(vec!["added", path.as_str()]);
        }
        for path in &diff.removed {
            table.add_row(vec!["removed", path.as_str()]);
        }
        for entry in &diff.modified {
            table.add_row(vec!["modified", entry.relative_path.as_str()]);
        }
        out.push_str(&table.to_string());
    }

    if !skipped.is_empty() {
        out.push_str("\n\n");
        out.push_str(&paint("Unreadable during verify:", color, Paint::Heading));
        for file in skipped {
            out.push_str(&format!("\n  {}: {}", file.relative_path, file.reason));
        }
    }

    out
}

/// Machine-readable verify report
pub fn format_verify_json(
    manifest_path: &Path,
    diff: &ManifestDiff,
    skipped: &[SkippedFile],
) -> Result<String, CliError> {
    let value = json!({
        "manifest": manifest_path.display().to_string(),
        "clean": diff.is_clean(),
        "added": diff.added,
        "removed": diff.removed,
        "modified": diff.modified,
        "skipped": skipped,
    });
    serde_json::to_string_pretty(&value)
        .map_err(|e| CliError::ScanError(crate::error::ScanError::Serialize(e)))
}

enum Paint {
    Ok,
    Heading,
}

fn paint(text: &str, color: bool, style: Paint) -> String {
    if !color {
        return text.to_string();
    }
    match style {
        Paint::Ok => format!("{}", text.green()),
        Paint::Heading => format!("{}", text.bold().underline()),
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
