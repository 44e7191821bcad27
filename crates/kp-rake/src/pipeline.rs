//! End-to-end keyphrase extraction.

use serde::Serialize;
use tracing::debug;

use crate::{
    Keyphrase, RakeError, StopWordMatcher, StopWordSet, WordScores,
    rank::{filter_ranked, rank, score_candidates},
    segment::{generate_candidate_phrases, split_sentences},
};

/// Every intermediate artifact of one extraction run.
#[derive(Debug, Clone)]
pub struct RakeAnalysis {
    /// Whitespace-normalized input text.
    pub text: String,
    /// Candidate phrases in encounter order, duplicates included.
    pub candidates: Vec<String>,
    /// Word statistics over `candidates`.
    pub word_scores: WordScores,
    /// Every distinct candidate, ranked by score before filtering.
    pub ranked: Vec<Keyphrase>,
    /// The filtered, cleaned result.
    pub keyphrases: Vec<Keyphrase>,
}

/// RAKE keyphrase extractor.
///
/// Holds a compiled stop word matcher and can be shared by reference between
/// any number of extractions; each call keeps its own working state.
#[derive(Debug, Clone)]
pub struct RakeExtractor {
    /// Phrase-boundary matcher built from the stop word list.
    matcher: StopWordMatcher,
}

impl RakeExtractor {
    /// Creates an extractor around an already compiled matcher.
    pub fn new(matcher: StopWordMatcher) -> Self {
        Self { matcher }
    }

    /// Compiles a matcher for `stop_words` and wraps it.
    pub fn from_stop_words(stop_words: &StopWordSet) -> Result<Self, RakeError> {
        StopWordMatcher::build(stop_words).map(Self::new)
    }

    /// Returns the stop word matcher.
    pub fn matcher(&self) -> &StopWordMatcher {
        &self.matcher
    }

    /// Extracts ranked keyphrases from `text`.
    ///
    /// Returns keyphrases sorted by score (highest first).
    pub fn extract(&self, text: &str) -> Result<Vec<Keyphrase>, RakeError> {
        self.analyze(text).map(|analysis| analysis.keyphrases)
    }

    /// Runs the full pipeline and returns every intermediate artifact.
    pub fn analyze(&self, text: &str) -> Result<RakeAnalysis, RakeError> {
        let text = normalize_whitespace(text);
        let candidates = generate_candidate_phrases(split_sentences(&text), &self.matcher);
        let word_scores = WordScores::calculate(&candidates);
        let ranked = rank(score_candidates(&candidates, &word_scores)?);
        let keyphrases = filter_ranked(&ranked);

        debug!(
            candidates = candidates.len(),
            words = word_scores.len(),
            ranked = ranked.len(),
            keyphrases = keyphrases.len(),
            "extracted keyphrases"
        );

        Ok(RakeAnalysis {
            text,
            candidates,
            word_scores,
            ranked,
            keyphrases,
        })
    }
}

/// Extracts keyphrases from `text` using a stop word source in list format.
///
/// Compiles the matcher for this call only; use [`RakeExtractor`] to reuse it.
pub fn extract(text: &str, stop_word_source: &str) -> Result<Vec<Keyphrase>, RakeError> {
    RakeExtractor::from_stop_words(&StopWordSet::parse_source(stop_word_source))?.extract(text)
}

/// Collapses every whitespace run, newlines included, to one space and trims the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Renders keyphrases as a JSON object mapping phrase to score.
///
/// Keys are written in rank order. Cleaning can map different phrases to the
/// same key, so the object may repeat a key; prefer the array form when the
/// consumer needs every entry.
pub fn to_json_object(keyphrases: &[Keyphrase]) -> Result<String, serde_json::Error> {
    let mut out = String::from("{");
    for (i, keyphrase) in keyphrases.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&serde_json::to_string(&keyphrase.phrase)?);
        out.push(':');
        out.push_str(&serde_json::to_string(&keyphrase.score)?);
    }
    out.push('}');
    Ok(out)
}

/// Serializable view of an analysis, used for `--explain` output.
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    /// Candidate phrases in encounter order.
    pub candidates: &'a [String],
    /// Word statistics sorted by score.
    pub words: Vec<WordReport<'a>>,
    /// Ranked candidates before filtering.
    pub ranked: &'a [Keyphrase],
    /// Final keyphrases.
    pub keyphrases: &'a [Keyphrase],
}

/// One word's statistics in an [`AnalysisReport`].
#[derive(Debug, Serialize)]
pub struct WordReport<'a> {
    /// The word.
    pub word: &'a str,
    /// Number of phrase occurrences containing the word.
    pub frequency: usize,
    /// Co-occurrence degree.
    pub degree: usize,
    /// `degree / frequency`.
    pub score: f64,
}

impl RakeAnalysis {
    /// Builds a serializable report borrowing from this analysis.
    pub fn report(&self) -> AnalysisReport<'_> {
        let words = self
            .word_scores
            .sorted()
            .into_iter()
            .map(|(word, stats)| WordReport {
                word,
                frequency: stats.frequency,
                degree: stats.degree,
                score: stats.score(),
            })
            .collect();
        AnalysisReport {
            candidates: &self.candidates,
            words,
            ranked: &self.ranked,
            keyphrases: &self.keyphrases,
        }
    }
}
