//! Phrase scoring, ranking and post-filtering.

use std::{cmp::Ordering, collections::HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{RakeError, WordScores, score::separate_words};

/// The ranked list is cut to its first `len / TOP_FRACTION_DIVISOR` entries.
pub const TOP_FRACTION_DIVISOR: f64 = 3.5;

/// Phrases with more space-separated tokens than this are dropped.
pub const MAX_PHRASE_WORDS: usize = 4;

/// A keyphrase with its RAKE score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyphrase {
    /// The phrase text.
    pub phrase: String,
    /// Sum of the word scores of the phrase (higher = more relevant).
    pub score: f64,
}

impl Keyphrase {
    /// Creates a new keyphrase.
    pub fn new(phrase: impl Into<String>, score: f64) -> Self {
        Self {
            phrase: phrase.into(),
            score,
        }
    }
}

/// Scores every distinct phrase, in order of first appearance.
///
/// A phrase's score is the sum of its word scores; numbers and phrases with no
/// scoring words contribute 0. Fails with [`RakeError::MissingWordScore`] if a
/// word was not scored, which means `word_scores` was computed over a different
/// phrase list.
pub fn score_candidates<S: AsRef<str>>(
    phrases: &[S],
    word_scores: &WordScores,
) -> Result<Vec<Keyphrase>, RakeError> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for phrase in phrases {
        let phrase = phrase.as_ref();
        if !seen.insert(phrase) {
            continue;
        }

        let mut score = 0.0;
        for word in separate_words(phrase, 0) {
            score += word_scores
                .score(&word)
                .ok_or_else(|| RakeError::MissingWordScore {
                    word: word.clone(),
                    phrase: phrase.to_string(),
                })?;
        }
        candidates.push(Keyphrase::new(phrase, score));
    }

    Ok(candidates)
}

/// Sorts candidates by score descending, keeping encounter order for ties.
pub fn rank(mut candidates: Vec<Keyphrase>) -> Vec<Keyphrase> {
    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    candidates
}

/// Number of ranked entries kept before the length and cleaning filters.
pub fn top_count(total: usize) -> usize {
    (total as f64 / TOP_FRACTION_DIVISOR) as usize
}

/// Applies the top-fraction cut, the phrase length limit and key cleaning to a
/// ranked list.
///
/// Surviving keys contain only tokens made of ASCII letters and hyphens, but
/// keep the score of the original phrase. Entries whose cleaned key is empty
/// are dropped.
pub fn filter_ranked(ranked: &[Keyphrase]) -> Vec<Keyphrase> {
    let keep = top_count(ranked.len());
    let result: Vec<Keyphrase> = ranked
        .iter()
        .take(keep)
        .filter(|k| k.phrase.split(' ').count() <= MAX_PHRASE_WORDS)
        .filter_map(|k| clean_phrase(&k.phrase).map(|phrase| Keyphrase::new(phrase, k.score)))
        .collect();

    debug!(
        ranked = ranked.len(),
        kept = keep,
        emitted = result.len(),
        "filtered ranked phrases"
    );
    result
}

/// Ranks candidates and applies [`filter_ranked`].
pub fn rank_and_filter(candidates: Vec<Keyphrase>) -> Vec<Keyphrase> {
    filter_ranked(&rank(candidates))
}

/// Drops every token containing a character outside `[A-Za-z-]`.
///
/// Returns `None` if nothing is left.
pub fn clean_phrase(phrase: &str) -> Option<String> {
    let cleaned = phrase
        .split(' ')
        .filter(|token| token.chars().all(|c| c.is_ascii_alphabetic() || c == '-'))
        .collect::<Vec<_>>()
        .join(" ");
    (!cleaned.is_empty()).then_some(cleaned)
}
