//! Sentence and candidate phrase segmentation.

use std::sync::LazyLock;

use regex::Regex;

use crate::stopwords::{PHRASE_SEPARATOR, StopWordMatcher};

/// Punctuation that ends a sentence, plus a hyphen standing alone between spaces.
static SENTENCE_DELIMITERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?,;:\t\\"()'\u{2019}\u{2013}]|\s-\s"#)
        .expect("sentence delimiter pattern is valid")
});

/// Splits text into sentences.
///
/// Empty fragments between adjacent delimiters are kept; they yield no phrases.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    SENTENCE_DELIMITERS.split(text)
}

/// Splits sentences into lowercase candidate phrases bounded by stop words.
///
/// Phrases keep their order and are not deduplicated. A sentence made only of
/// stop words contributes nothing.
pub fn generate_candidate_phrases<'a, I>(sentences: I, matcher: &StopWordMatcher) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut phrases = Vec::new();
    for sentence in sentences {
        let marked = matcher.mark_boundaries(sentence.trim());
        phrases.extend(
            marked
                .split(PHRASE_SEPARATOR)
                .map(str::trim)
                .filter(|phrase| !phrase.is_empty())
                .map(str::to_lowercase),
        );
    }
    phrases
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::StopWordSet;

    fn matcher(source: &str) -> StopWordMatcher {
        StopWordMatcher::build(&StopWordSet::parse_source(source)).unwrap()
    }

    #[test]
    fn splits_on_punctuation() {
        let sentences: Vec<_> = split_sentences("One. Two! Three? four, five; six: seven").collect();
        assert_eq!(
            sentences,
            ["One", " Two", " Three", " four", " five", " six", " seven"]
        );
    }

    #[test]
    fn splits_on_quotes_brackets_and_dashes() {
        let sentences: Vec<_> =
            split_sentences("a (b) \"c\" it\u{2019}s x\u{2013}y p - q").collect();
        assert_eq!(
            sentences,
            ["a ", "b", " ", "c", " it", "s x", "y p", "q"]
        );
    }

    #[test]
    fn hyphen_inside_word_is_not_a_delimiter() {
        let sentences: Vec<_> = split_sentences("well-known fact").collect();
        assert_eq!(sentences, ["well-known fact"]);
    }

    #[test]
    fn adjacent_delimiters_yield_empty_sentences() {
        let sentences: Vec<_> = split_sentences("a..b").collect();
        assert_eq!(sentences, ["a", "", "b"]);
    }

    #[test]
    fn phrases_bounded_by_stop_words() {
        let m = matcher("of\nthe\nover");
        let text = "Compatibility of systems of linear constraints over the set of natural numbers.";
        let phrases = generate_candidate_phrases(split_sentences(text), &m);
        assert_eq!(
            phrases,
            [
                "compatibility",
                "systems",
                "linear constraints",
                "set",
                "natural numbers"
            ]
        );
    }

    #[test]
    fn repeated_phrases_are_kept() {
        let m = matcher("and");
        let phrases = generate_candidate_phrases(["Rust and rust", "RUST"], &m);
        assert_eq!(phrases, ["rust", "rust", "rust"]);
    }

    #[test]
    fn stop_word_only_sentence_yields_nothing() {
        let m = matcher("of the and");
        let phrases = generate_candidate_phrases(["of the and", "", "  "], &m);
        assert!(phrases.is_empty());
    }

    #[test]
    fn symbols_after_stop_word_stay_in_phrase() {
        let m = matcher("of");
        let phrases = generate_candidate_phrases(["sets of/unions"], &m);
        assert_eq!(phrases, ["sets", "/unions"]);
    }
}
