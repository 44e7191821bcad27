//! Implementation of `kp extract`.

use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use kp_config::OutputFormat;
use kp_rake::{Keyphrase, RakeExtractor, StopWordSet};
use tracing::{debug, info};

use crate::cli::{
    args::ExtractCommand,
    context::CommandContext,
    output::{output_analysis, output_keyphrases},
};

/// Extracts keyphrases from the input text and prints them.
pub fn run(ctx: &CommandContext, cmd: &ExtractCommand) -> ExitCode {
    let stop_words = match load_stop_words(ctx, cmd) {
        Ok(stop_words) => stop_words,
        Err(code) => return code,
    };

    let extractor = match RakeExtractor::from_stop_words(&stop_words) {
        Ok(extractor) => extractor,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let text = match read_input(cmd) {
        Ok(text) => text,
        Err(code) => return code,
    };

    let analysis = match extractor.analyze(&text) {
        Ok(analysis) => analysis,
        Err(e) => {
            eprintln!("error: extraction failed: {e}");
            return ExitCode::FAILURE;
        }
    };

    let limit = cmd.limit.or(ctx.config.output.limit);
    let keyphrases = apply_limit(&analysis.keyphrases, limit);
    let format = if cmd.json {
        OutputFormat::Json
    } else {
        ctx.config.output.format
    };

    if cmd.explain {
        output_analysis(&analysis, keyphrases, format)
    } else {
        output_keyphrases(keyphrases, format)
    }
}

/// Loads the stop word list for this invocation.
///
/// Files given on the command line replace the configured ones and resolve
/// against the working directory. With neither, the built-in list is used.
fn load_stop_words(ctx: &CommandContext, cmd: &ExtractCommand) -> Result<StopWordSet, ExitCode> {
    let paths: Vec<PathBuf> = if cmd.stopwords.is_empty() {
        ctx.config.rake.stopwords.clone()
    } else {
        cmd.stopwords.iter().map(|path| ctx.cwd.join(path)).collect()
    };

    if paths.is_empty() {
        info!("no stop word file configured, using built-in list");
        return Ok(StopWordSet::builtin());
    }

    let mut stop_words = StopWordSet::default();
    for path in &paths {
        match StopWordSet::load_file(path) {
            Ok(loaded) => stop_words.merge(loaded),
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        }
    }
    debug!(
        files = paths.len(),
        words = stop_words.len(),
        "loaded stop words"
    );
    Ok(stop_words)
}

/// Reads the text to analyze from the positional argument, a file, or stdin.
fn read_input(cmd: &ExtractCommand) -> Result<String, ExitCode> {
    if let Some(text) = &cmd.text {
        return Ok(text.clone());
    }

    if let Some(path) = &cmd.file {
        return fs::read_to_string(path).map_err(|e| {
            eprintln!("error: failed to read {}: {e}", path.display());
            ExitCode::FAILURE
        });
    }

    let mut text = String::new();
    io::stdin().read_to_string(&mut text).map_err(|e| {
        eprintln!("error: failed to read stdin: {e}");
        ExitCode::FAILURE
    })?;
    Ok(text)
}

/// Truncates the result list to `limit` entries when a limit is set.
fn apply_limit(keyphrases: &[Keyphrase], limit: Option<usize>) -> &[Keyphrase] {
    match limit {
        Some(limit) => &keyphrases[..limit.min(keyphrases.len())],
        None => keyphrases,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Keyphrase> {
        vec![
            Keyphrase::new("minimal generating sets", 8.67),
            Keyphrase::new("linear diophantine equations", 8.5),
            Keyphrase::new("natural numbers", 4.0),
        ]
    }

    #[test]
    fn test_apply_limit_truncates() {
        let keyphrases = sample();
        let limited = apply_limit(&keyphrases, Some(2));
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[1].phrase, "linear diophantine equations");
    }

    #[test]
    fn test_apply_limit_larger_than_list() {
        let keyphrases = sample();
        assert_eq!(apply_limit(&keyphrases, Some(10)).len(), 3);
    }

    #[test]
    fn test_apply_limit_none_keeps_all() {
        let keyphrases = sample();
        assert_eq!(apply_limit(&keyphrases, None), keyphrases.as_slice());
    }

    #[test]
    fn test_read_input_prefers_positional_text() {
        let cmd = ExtractCommand {
            text: Some("systems of linear constraints".to_string()),
            ..ExtractCommand::default()
        };
        assert_eq!(read_input(&cmd).unwrap(), "systems of linear constraints");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.txt");
        fs::write(&path, "natural numbers").unwrap();

        let cmd = ExtractCommand {
            file: Some(path),
            ..ExtractCommand::default()
        };
        assert_eq!(read_input(&cmd).unwrap(), "natural numbers");
    }

    #[test]
    fn test_read_input_missing_file_fails() {
        let cmd = ExtractCommand {
            file: Some(PathBuf::from("/nonexistent/kp/input.txt")),
            ..ExtractCommand::default()
        };
        assert!(read_input(&cmd).is_err());
    }
}
