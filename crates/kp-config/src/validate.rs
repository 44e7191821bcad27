//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, fs, path::Path};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// A stop word file does not exist.
    StopWordFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// A stop word path exists but is not a regular file.
    StopWordPathNotFile {
        /// Path that is not a file.
        path: String,
    },
    /// A stop word file holds only comments and blank lines.
    StopWordFileEmpty {
        /// Path of the empty list.
        path: String,
    },
    /// `output.limit` is zero, so nothing would ever be printed.
    OutputLimitZero,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StopWordFileMissing { path } => {
                write!(f, "stop word file does not exist: {path}")
            }
            Self::StopWordPathNotFile { path } => {
                write!(f, "stop word path is not a file: {path}")
            }
            Self::StopWordFileEmpty { path } => {
                write!(f, "stop word file contains no words: {path}")
            }
            Self::OutputLimitZero => write!(f, "output.limit is 0; no keyphrases will be printed"),
        }
    }
}

/// Validates the configuration and returns any warnings.
///
/// This checks for:
/// - Stop word files that don't exist, aren't files, or hold no words
/// - An output limit of zero
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings: Vec<ConfigWarning> = config
        .rake
        .stopwords
        .iter()
        .filter_map(|path| validate_stopword_file(path))
        .collect();

    if config.output.limit == Some(0) {
        warnings.push(ConfigWarning::OutputLimitZero);
    }

    warnings
}

/// Checks a single stop word file.
fn validate_stopword_file(path: &Path) -> Option<ConfigWarning> {
    let display = path.display().to_string();
    if !path.exists() {
        return Some(ConfigWarning::StopWordFileMissing { path: display });
    }
    if !path.is_file() {
        return Some(ConfigWarning::StopWordPathNotFile { path: display });
    }

    // Unreadable files are reported when the list is actually loaded.
    let contents = fs::read_to_string(path).ok()?;
    let has_words = contents
        .lines()
        .any(|line| !line.trim_start().starts_with('#') && !line.trim().is_empty());
    (!has_words).then_some(ConfigWarning::StopWordFileEmpty { path: display })
}
