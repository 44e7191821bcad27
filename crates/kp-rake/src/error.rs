//! Error types for keyphrase extraction.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while building a matcher or extracting keyphrases.
#[derive(Debug, Error)]
pub enum RakeError {
    /// The stop word source produced no words, so no phrase boundaries can be built.
    #[error("stop word list is empty: at least one stop word is required")]
    EmptyStopWords,

    /// Failed to read a stop word file.
    #[error("failed to read stop word file {path}: {source}")]
    ReadStopWords {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to read a stop word source that has no path (stdin, in-memory readers).
    #[error("failed to read stop word source: {source}")]
    ReadSource {
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The combined stop word pattern could not be compiled.
    #[error("failed to compile stop word pattern: {source}")]
    InvalidPattern {
        /// Underlying regex error.
        source: regex::Error,
    },

    /// A phrase contained a word that was never scored.
    ///
    /// Scoring and ranking must run over the same phrase list; this indicates a
    /// caller bug rather than bad input.
    #[error("internal consistency error: word '{word}' in phrase '{phrase}' has no score")]
    MissingWordScore {
        /// The word without a score.
        word: String,
        /// The phrase being scored.
        phrase: String,
    },
}
