//! Word validity checking
//!
//! A submitted guess must be a recognized word. The dictionary may still be
//! loading when the player presses Enter; that is reported as
//! [`Validity::Unavailable`] and never counts as a pass.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Answer from a validity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    /// The checker has not finished loading
    Unavailable,
}

/// Decides whether a guess is a real word
pub trait WordValidator {
    fn check(&self, word: &Word) -> Validity;
}

/// Set of accepted words, empty-handed until loaded
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Option<FxHashSet<String>>,
}

impl Lexicon {
    /// A lexicon whose words have not arrived yet
    #[must_use]
    pub fn pending() -> Self {
        Self { words: None }
    }

    /// A ready lexicon containing `words`
    #[must_use]
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut lexicon = Self::pending();
        lexicon.fill(words);
        lexicon
    }

    /// Install the word set, replacing any previous one
    pub fn fill<'a>(&mut self, words: impl IntoIterator<Item = &'a Word>) {
        self.words = Some(words.into_iter().map(|w| w.text().to_string()).collect());
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.words.is_some()
    }

    /// Number of known words (0 while pending)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.as_ref().map_or(0, FxHashSet::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl WordValidator for Lexicon {
    fn check(&self, word: &Word) -> Validity {
        match &self.words {
            None => Validity::Unavailable,
            Some(words) if words.contains(word.text()) => Validity::Valid,
            Some(_) => Validity::Invalid,
        }
    }
}

/// Accepts every well-formed word
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordValidator for AcceptAll {
    fn check(&self, _word: &Word) -> Validity {
        Validity::Valid
    }
}
