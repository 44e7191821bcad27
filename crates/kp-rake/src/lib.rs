//! Keyphrase extraction with RAKE (Rapid Automatic Keyword Extraction).
//!
//! RAKE splits text into sentences, then into candidate phrases wherever a
//! stop word occurs. Each word is scored by how many other words it
//! co-occurs with relative to how often it appears, and each phrase is scored
//! by the sum of its word scores. The extraction pipeline runs in five steps:
//!
//! 1. **Stop words**: load a stop word list and compile it into one matcher
//! 2. **Segmentation**: split sentences, then split sentences at stop words
//! 3. **Word scoring**: per-word frequency and degree over all phrases
//! 4. **Ranking**: phrase scores, sorted and cut to the top fraction
//! 5. **Cleaning**: drop long phrases and non-alphabetic tokens from the keys
//!
//! The compiled [`StopWordMatcher`] is immutable; build it once and share a
//! [`RakeExtractor`] by reference across extractions.
//!
//! ```no_run
//! use kp_rake::{RakeExtractor, StopWordSet};
//!
//! let extractor = RakeExtractor::from_stop_words(&StopWordSet::builtin())?;
//! for keyphrase in extractor.extract("Compatibility of systems of linear constraints.")? {
//!     println!("{:.2} {}", keyphrase.score, keyphrase.phrase);
//! }
//! # Ok::<(), kp_rake::RakeError>(())
//! ```

#![warn(missing_docs)]

mod error;
mod pipeline;
mod rank;
mod score;
mod segment;
mod stopwords;

pub use error::RakeError;
pub use pipeline::{
    AnalysisReport, RakeAnalysis, RakeExtractor, WordReport, extract, normalize_whitespace,
    to_json_object,
};
pub use rank::{
    Keyphrase, MAX_PHRASE_WORDS, TOP_FRACTION_DIVISOR, clean_phrase, filter_ranked, rank,
    rank_and_filter, score_candidates, top_count,
};
pub use score::{WordScores, WordStats, is_number, separate_words};
pub use segment::{generate_candidate_phrases, split_sentences};
pub use stopwords::{StopWordMatcher, StopWordSet};
