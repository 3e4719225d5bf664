//! Word lists, target selection and validity checking
//!
//! The default corpus is embedded in the binary; custom lists can be loaded
//! from files.

mod corpus;
mod dictionary;
mod embedded;
pub mod loader;

pub use corpus::{Corpus, CorpusError, WordSource};
pub use dictionary::{AcceptAll, Lexicon, Validity, WordValidator};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn corpus_is_lowercase_five_letter_words() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn corpus_has_no_duplicates() {
        let unique: std::collections::HashSet<_> = WORDS.iter().collect();
        assert_eq!(unique.len(), WORDS.len());
    }

    #[test]
    fn corpus_contains_common_words() {
        for word in ["stale", "lapse", "crane"] {
            assert!(WORDS.contains(&word), "'{word}' missing from corpus");
        }
    }
}
