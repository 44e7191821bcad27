//! Stop word lists and the compiled phrase-boundary matcher.
//!
//! Stop words are loaded from a line-oriented source: lines whose first
//! non-blank character is `#` are comments, every other line may hold several
//! whitespace-separated words. The list is compiled once into a
//! [`StopWordMatcher`], which is immutable and shared by reference across
//! extractions.

use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use regex::{Captures, Regex, RegexBuilder};
use stop_words::LANGUAGE;
use tracing::debug;

use crate::RakeError;

/// Marker substituted for every stop word before a sentence is split into phrases.
pub(crate) const PHRASE_SEPARATOR: char = '|';

/// Compiled size limit for the combined alternation.
///
/// Case-insensitive Unicode word boundaries over a thousand-word list exceed
/// the regex crate's default limit.
const PATTERN_SIZE_LIMIT: usize = 64 * (1 << 20);

/// An ordered list of stop words.
///
/// Order matters only for matching precedence; duplicates are harmless because
/// the matcher is a union of all words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    /// Words in source order, as written in the source.
    words: Vec<String>,
}

impl StopWordSet {
    /// Creates a stop word set from an explicit word list.
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Returns the English stop word list bundled with the `stop-words` crate.
    pub fn builtin() -> Self {
        let words = stop_words::get(LANGUAGE::English)
            .iter()
            .map(|word| word.to_string())
            .collect();
        Self { words }
    }

    /// Parses a stop word source held in memory.
    pub fn parse_source(source: &str) -> Self {
        let mut set = Self::default();
        for line in source.lines() {
            set.push_line(line);
        }
        set
    }

    /// Loads stop words from a line-oriented reader.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, RakeError> {
        let mut set = Self::default();
        for line in reader.lines() {
            let line = line.map_err(|source| RakeError::ReadSource { source })?;
            set.push_line(&line);
        }
        Ok(set)
    }

    /// Loads stop words from a UTF-8 file.
    pub fn load_file(path: &Path) -> Result<Self, RakeError> {
        let read_error = |source| RakeError::ReadStopWords {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        let mut set = Self::default();
        for line in BufReader::new(file).lines() {
            set.push_line(&line.map_err(read_error)?);
        }
        debug!(path = %path.display(), words = set.len(), "loaded stop words");
        Ok(set)
    }

    /// Appends all words of another set after this set's words.
    pub fn merge(&mut self, other: Self) {
        self.words.extend(other.words);
    }

    /// Returns the words in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words, counting duplicates.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the set holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Adds the words of one source line unless it is a comment.
    fn push_line(&mut self, line: &str) {
        if line.trim_start().starts_with('#') {
            return;
        }
        self.words.extend(line.split_whitespace().map(str::to_string));
    }
}

/// A compiled, case-insensitive matcher for every word of a [`StopWordSet`].
///
/// A stop word matches only as a whole word: it must start on a word boundary
/// and must not be followed by a word character or a hyphen, so `pre` does not
/// match inside `pre-existing`.
#[derive(Debug, Clone)]
pub struct StopWordMatcher {
    /// `\b(w1|w2|...)(?:[^\w-]|$)`; group 1 is the stop word itself.
    pattern: Regex,
}

impl StopWordMatcher {
    /// Compiles the matcher for a stop word set.
    ///
    /// Fails with [`RakeError::EmptyStopWords`] when the set has no words.
    pub fn build(set: &StopWordSet) -> Result<Self, RakeError> {
        if set.is_empty() {
            return Err(RakeError::EmptyStopWords);
        }

        let alternation = set
            .words()
            .iter()
            .map(|word| regex::escape(word))
            .collect::<Vec<_>>()
            .join("|");
        // The regex crate has no look-ahead, so the boundary character is
        // consumed by a trailing group and restored on replacement.
        let source = format!(r"\b({alternation})(?:[^\w-]|$)");
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map_err(|source| RakeError::InvalidPattern { source })?;

        debug!(words = set.len(), "compiled stop word matcher");
        Ok(Self { pattern })
    }

    /// Replaces every stop word in `sentence` with the phrase separator.
    pub(crate) fn mark_boundaries<'t>(&self, sentence: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(sentence, |caps: &Captures<'_>| {
            let whole = &caps[0];
            let word_len = caps[1].len();
            format!("{PHRASE_SEPARATOR}{}", &whole[word_len..])
        })
    }

    /// Returns every stop word occurrence in `text`, in order.
    pub fn find_iter<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Returns true if `text` contains at least one stop word.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }
}
