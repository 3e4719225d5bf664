//! Core domain types for the game
//!
//! Words, letter tiers, row feedback and the keyboard tracker. Everything here
//! is pure and independent of any front end.

mod feedback;
mod keyboard;
mod tier;
mod word;

pub use feedback::{Feedback, MatchRule};
pub use keyboard::{KEY_ROWS, Keyboard};
pub use tier::Tier;
pub use word::{DEFAULT_WORD_LENGTH, LetterFrequency, TargetWord, Word, WordError};
