//! Word frequency and co-occurrence degree scoring.
//!
//! Every word of every candidate phrase is counted once per occurrence
//! (frequency) and credited with the number of other words in that phrase
//! (degree). After all phrases are seen each word's frequency is added to its
//! degree, and the word score is `degree / frequency`. Words that appear in
//! long phrases therefore score higher than words that tend to stand alone.

use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;
use tracing::trace;

/// Any character that cannot be part of a word.
static WORD_SPLITTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_+\-/]").expect("word splitter pattern is valid"));

/// Splits a phrase into scoring words.
///
/// Tokens are lowercased and kept only if they are longer than `min_length`
/// characters and are not numbers. Numbers stay in the phrase text itself;
/// they are only excluded from scoring.
pub fn separate_words(phrase: &str, min_length: usize) -> Vec<String> {
    WORD_SPLITTER
        .split(phrase)
        .map(|token| token.trim().to_lowercase())
        .filter(|word| {
            !word.is_empty() && word.chars().count() > min_length && !is_number(word)
        })
        .collect()
}

/// Returns true if the token is numeric.
///
/// Tokens containing `.` are checked as floats, everything else as integers
/// with an optional sign and single underscores between digit groups.
pub fn is_number(token: &str) -> bool {
    if token.contains('.') {
        return token.parse::<f64>().is_ok();
    }

    let digits = token.strip_prefix(['+', '-']).unwrap_or(token);
    !digits.is_empty()
        && digits
            .split('_')
            .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
}

/// Frequency and degree of a single word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordStats {
    /// Number of phrase occurrences containing the word.
    pub frequency: usize,
    /// Co-occurrence degree, including the word's own frequency.
    pub degree: usize,
}

impl WordStats {
    /// Returns `degree / frequency`.
    pub fn score(&self) -> f64 {
        self.degree as f64 / self.frequency as f64
    }
}

/// Per-word statistics over a list of candidate phrases.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordScores {
    /// Statistics keyed by lowercase word.
    stats: HashMap<String, WordStats>,
}

impl WordScores {
    /// Computes word statistics for the given phrases.
    ///
    /// Phrases without any scoring word (all numbers, for instance) are skipped.
    pub fn calculate<S: AsRef<str>>(phrases: &[S]) -> Self {
        let mut stats: HashMap<String, WordStats> = HashMap::new();

        for phrase in phrases {
            let words = separate_words(phrase.as_ref(), 0);
            if words.is_empty() {
                trace!(phrase = phrase.as_ref(), "phrase has no scoring words");
                continue;
            }

            let co_occurrences = words.len() - 1;
            for word in words {
                let entry = stats.entry(word).or_default();
                entry.frequency += 1;
                entry.degree += co_occurrences;
            }
        }

        for entry in stats.values_mut() {
            entry.degree += entry.frequency;
        }

        Self { stats }
    }

    /// Returns the score of a word, or `None` if it was never seen.
    pub fn score(&self, word: &str) -> Option<f64> {
        self.stats.get(word).map(WordStats::score)
    }

    /// Returns the statistics of a word, or `None` if it was never seen.
    pub fn stats(&self, word: &str) -> Option<WordStats> {
        self.stats.get(word).copied()
    }

    /// Returns all words with their statistics, sorted by score descending then word.
    pub fn sorted(&self) -> Vec<(&str, WordStats)> {
        let mut entries: Vec<_> = self
            .stats
            .iter()
            .map(|(word, stats)| (word.as_str(), *stats))
            .collect();
        entries.sort_by(|a, b| {
            b.1.score()
                .total_cmp(&a.1.score())
                .then_with(|| a.0.cmp(b.0))
        });
        entries
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    /// Returns true if no words were scored.
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }
}
