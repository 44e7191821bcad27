//! Implementation of `kp check`.

use std::process::ExitCode;

use kp_config::{ConfigWarning, discover_config_files};
use kp_rake::StopWordSet;

use crate::cli::context::CommandContext;

/// Validates configuration and reports problems.
///
/// Exits successfully only when no warnings are found.
pub fn run(ctx: &CommandContext) -> ExitCode {
    let config_files = discover_config_files(&ctx.cwd);

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'kp init' to create a configuration file.");
    } else {
        println!("Config files:");
        for path in &config_files {
            println!("  {}", path.display());
        }
    }
    println!();

    let config = &ctx.config;
    println!("Stop words:");
    if config.rake.stopwords.is_empty() {
        println!("  built-in ({} words)", StopWordSet::builtin().len());
    } else {
        for path in &config.rake.stopwords {
            let status = if path.is_file() { "ok" } else { "missing" };
            println!("  [{status}] {}", path.display());
        }
    }
    println!();

    let warnings = config.validate();
    if warnings.is_empty() {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    println!("Warnings ({}):", warnings.len());
    for warning in &warnings {
        println!("  - {warning}");
    }
    println!();

    print_hints(&warnings);

    ExitCode::FAILURE
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|warning| match warning {
            ConfigWarning::StopWordFileMissing { .. } => {
                "Create the stop word file or fix the path in [rake] stopwords."
            }
            ConfigWarning::StopWordPathNotFile { .. } => {
                "Stop word paths must point to files, not directories."
            }
            ConfigWarning::StopWordFileEmpty { .. } => {
                "Add at least one word; extraction fails on an empty stop word list."
            }
            ConfigWarning::OutputLimitZero => "Remove output.limit or set it above zero.",
        })
        .collect();

    hints.sort_unstable();
    hints.dedup();

    println!("Hints:");
    for hint in hints {
        println!("  - {hint}");
    }
}
