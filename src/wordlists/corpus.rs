//! Target word selection
//!
//! A [`WordSource`] hands out one target word per game. [`Corpus`] picks
//! uniformly from a word list; seed it for reproducible games.

use crate::core::Word;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorpusError {
    #[error("no {0}-letter words available to choose from")]
    Empty(usize),
}

/// Supplies target words
pub trait WordSource {
    /// Pick the target word for a new game
    ///
    /// # Errors
    /// Returns `CorpusError` when no word can be supplied.
    fn random_word(&mut self) -> Result<Word, CorpusError>;
}

/// A list of candidate target words
#[derive(Debug, Clone)]
pub struct Corpus {
    words: Vec<Word>,
    length: usize,
    rng: StdRng,
}

impl Corpus {
    /// Build a corpus of `length`-letter words seeded from the OS
    ///
    /// Words of any other length are dropped.
    #[must_use]
    pub fn new(words: Vec<Word>, length: usize) -> Self {
        Self::with_rng(words, length, StdRng::from_os_rng())
    }

    /// Build a corpus with a fixed seed
    #[must_use]
    pub fn seeded(words: Vec<Word>, length: usize, seed: u64) -> Self {
        Self::with_rng(words, length, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut words: Vec<Word>, length: usize, rng: StdRng) -> Self {
        words.retain(|w| w.len() == length);
        Self { words, length, rng }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordSource for Corpus {
    fn random_word(&mut self) -> Result<Word, CorpusError> {
        if self.words.is_empty() {
            return Err(CorpusError::Empty(self.length));
        }
        let index = self.rng.random_range(0..self.words.len());
        Ok(self.words[index].clone())
    }
}
