//! kp: keyphrase extraction from plain text.
//!
//! `kp extract` ranks the multi-word phrases of a document with RAKE (Rapid
//! Automatic Keyword Extraction) using a configurable stop word list. Settings
//! come from `.kp.toml` files discovered from the working directory upward.

#![warn(missing_docs)]

mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{
    CommandContext,
    args::{Cli, Commands},
    commands,
};

/// Environment variable holding a log filter directive.
const LOG_ENV: &str = "KP_LOG";

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = match cli.command {
        Commands::Init(_) => CommandContext::load_cwd_only(),
        _ => CommandContext::load(),
    };
    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}

/// Installs the stderr log subscriber.
///
/// `KP_LOG` takes precedence, then `RUST_LOG`, then a default derived from `-v`.
fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Builds the default filter directive for the kp crates at the given verbosity.
fn default_directive(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    format!("kp={level},kp_rake={level},kp_config={level}")
}
