use anyhow::Result;
use clap::Parser;
use fix_api_urls::{default_rules, patcher, report, DEFAULT_TARGETS};
use std::env;

/// Rewrite hardcoded frontend API URLs to environment-variable fallbacks.
///
/// Runs against the fixed page list, resolved relative to the current
/// directory. Re-running is harmless: already-patched files are skipped.
#[derive(Parser)]
#[command(name = "fix-api-urls")]
#[command(about = "Rewrite hardcoded frontend API URLs to env-variable fallbacks", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let root = env::current_dir()?;
    let result = patcher::run(&root, DEFAULT_TARGETS, &default_rules())?;

    report::print_report(&result);

    Ok(())
}
