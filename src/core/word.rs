//! Word representation
//!
//! A [`Word`] is a validated run of lowercase ASCII letters. The target of a
//! game additionally carries its [`LetterFrequency`] map, see [`TargetWord`].

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Word length used when none is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// A lowercase word of fixed length
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly {expected} letters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a word of the default length (5)
    ///
    /// # Errors
    /// Returns `WordError` if the text is not exactly 5 ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("Stale").unwrap();
    /// assert_eq!(word.text(), "stale");
    ///
    /// assert!(Word::new("toolong").is_err());
    /// assert!(Word::new("st4le").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        Self::with_length(text, DEFAULT_WORD_LENGTH)
    }

    /// Create a word that must have exactly `length` letters
    ///
    /// Input must be ASCII; it is lowercased before the remaining checks.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not `length`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    pub fn with_length(text: impl Into<String>, length: usize) -> Result<Self, WordError> {
        let mut text = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }
        text.make_ascii_lowercase();

        if text.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: text.len(),
            });
        }

        if !text.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Always false for a validated word of non-zero length
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Count how often each letter occurs
    #[must_use]
    pub fn letter_frequency(&self) -> LetterFrequency {
        let mut counts = FxHashMap::default();
        for &letter in self.letters() {
            *counts.entry(letter).or_insert(0) += 1;
        }
        LetterFrequency(counts)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Letter → occurrence count within a word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency(FxHashMap<u8, u8>);

impl LetterFrequency {
    /// Whether the letter occurs at all
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        self.0.contains_key(&letter)
    }

    /// Occurrences of `letter` (0 when absent)
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u8 {
        self.0.get(&letter).copied().unwrap_or(0)
    }

    pub(crate) fn counts(&self) -> FxHashMap<u8, u8> {
        self.0.clone()
    }
}

/// The word a session is trying to guess, with its frequency map
///
/// Both are fixed once built; the frequency map is derived exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetWord {
    word: Word,
    frequency: LetterFrequency,
}

impl TargetWord {
    #[must_use]
    pub fn new(word: Word) -> Self {
        let frequency = word.letter_frequency();
        Self { word, frequency }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn frequency(&self) -> &LetterFrequency {
        &self.frequency
    }
}

impl From<Word> for TargetWord {
    fn from(word: Word) -> Self {
        Self::new(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("stale").unwrap();
        assert_eq!(word.text(), "stale");
        assert_eq!(word.letters(), b"stale");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("STALE").unwrap().text(), "stale");
        assert_eq!(Word::new("StAlE").unwrap().text(), "stale");
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(
            Word::new("toolong"),
            Err(WordError::InvalidLength {
                expected: 5,
                actual: 7
            })
        );
        assert!(matches!(
            Word::new(""),
            Err(WordError::InvalidLength { actual: 0, .. })
        ));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert_eq!(Word::new("st4le"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("sta e"), Err(WordError::InvalidCharacters));
        assert_eq!(Word::new("stälé"), Err(WordError::NonAscii));
    }

    #[test]
    fn unicode_letters_do_not_fold_into_ascii() {
        // KELVIN SIGN lowercases to 'k'
        assert_eq!(Word::new("\u{212A}ayak"), Err(WordError::NonAscii));
        assert_eq!(Word::new("KAYAK").unwrap().text(), "kayak");
    }

    #[test]
    fn word_with_custom_length() {
        assert!(Word::with_length("cat", 3).is_ok());
        assert!(Word::with_length("planet", 6).is_ok());
        assert!(Word::with_length("stale", 6).is_err());
    }

    #[test]
    fn letter_frequency_counts_repeats() {
        let freq = Word::new("speed").unwrap().letter_frequency();
        assert_eq!(freq.count(b'e'), 2);
        assert_eq!(freq.count(b's'), 1);
        assert_eq!(freq.count(b'z'), 0);
        assert!(freq.contains(b'd'));
        assert!(!freq.contains(b'a'));
    }

    #[test]
    fn target_word_derives_frequency() {
        let target = TargetWord::new(Word::new("stale").unwrap());
        assert_eq!(target.word().text(), "stale");
        assert_eq!(target.frequency().count(b's'), 1);
        assert!(target.frequency().contains(b'l'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("stale").unwrap();
        assert_eq!(format!("{word}"), "stale");
    }
}
