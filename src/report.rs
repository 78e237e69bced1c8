//! Console reporting.
//!
//! One status line per target, then a summary with the modified-file count.
//! The line text is a compatibility contract (downstream scripts grep for
//! these prefixes), so only the glyphs are tinted; `colored` drops the tint
//! automatically when stdout is not a terminal.

use crate::patcher::{FileOutcome, RunResult};
use colored::Colorize;
use std::path::Path;

/// Plain (uncolored) status line for a single target.
pub fn status_line(path: &Path, outcome: FileOutcome) -> String {
    match outcome {
        FileOutcome::Fixed => format!("✓ Fixed: {}", path.display()),
        FileOutcome::Skipped => {
            format!("- Skipped: {} (already fixed or not found)", path.display())
        }
        FileOutcome::NotFound => format!("✗ Not found: {}", path.display()),
    }
}

/// Plain (uncolored) summary line, including its leading blank line.
pub fn summary_line(fixed: usize) -> String {
    format!("\n✅ Fixed {fixed} files!")
}

/// Print the full run report: per-target lines in run order, then the summary.
pub fn print_report(result: &RunResult) {
    for (path, outcome) in &result.outcomes {
        match outcome {
            FileOutcome::Fixed => {
                println!("{} Fixed: {}", "✓".green(), path.display());
            }
            FileOutcome::Skipped => {
                println!("- Skipped: {} (already fixed or not found)", path.display());
            }
            FileOutcome::NotFound => {
                println!("{} Not found: {}", "✗".red(), path.display());
            }
        }
    }

    println!("\n✅ Fixed {} files!", result.fixed);
}
