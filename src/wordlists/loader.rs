//! Word list loading utilities
//!
//! Reads word lists from files or the embedded corpus, keeping only entries
//! that are valid words of the requested length.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words of `length` letters from a file, one per line
///
/// Blank lines, `#` comments and entries that are not valid words of the
/// right length are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, length: usize) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_words(&content, length))
}

/// Parse newline-separated words of `length` letters
#[must_use]
pub fn parse_words(content: &str, length: usize) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::with_length(line, length).ok())
        .collect()
}

/// Convert an embedded string slice to words of `length` letters
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_from_slice;
/// use wordle_game::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS, 5);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], length: usize) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| Word::with_length(s, length).ok())
        .collect()
}
