//! Clap argument definitions for the `kp` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "kp")]
#[command(about = "Keyphrase extraction from plain text using RAKE")]
pub struct Cli {
    /// Increase log verbosity on stderr (-v for info, -vv for debug, -vvv for trace)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `kp extract`.
#[derive(Args, Debug, Clone, Default)]
pub struct ExtractCommand {
    /// Text to extract keyphrases from (reads stdin when omitted)
    #[arg(conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// Stop word file (can be specified multiple times; overrides configuration)
    #[arg(short = 's', long = "stopwords")]
    pub stopwords: Vec<PathBuf>,

    /// Maximum keyphrases to print
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Show candidate phrases, word scores, and the full ranking
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `kp init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.kp.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `kp` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Extract ranked keyphrases from text
    Extract(ExtractCommand),

    /// Initialize kp configuration in current directory
    Init(InitCommand),

    /// Show effective configuration settings
    Config,

    /// Validate configuration and diagnose issues
    Check,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_repeated_stopwords() {
        let cli = Cli::parse_from(["kp", "extract", "-s", "a.txt", "--stopwords", "b.txt", "text"]);
        let Commands::Extract(cmd) = cli.command else {
            panic!("expected extract command");
        };
        assert_eq!(cmd.stopwords, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(cmd.text.as_deref(), Some("text"));
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::parse_from(["kp", "extract", "-vv", "--json"]);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_text_conflicts_with_file() {
        let result = Cli::try_parse_from(["kp", "extract", "text", "--file", "input.txt"]);
        assert!(result.is_err());
    }
}
