//! Wordle Game
//!
//! A guess-the-word game engine with a terminal UI and a text mode. The
//! engine is front-end agnostic: a [`GameSession`](game::GameSession) takes
//! input events, checks guesses against a target word and tracks the best
//! known tier of every keyboard letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Tier, Word};
//! use wordle_game::game::{GameConfig, GameSession, GameStatus};
//! use wordle_game::wordlists::AcceptAll;
//!
//! let mut session = GameSession::new(GameConfig::default()).unwrap();
//! let id = session.session_id();
//! session.install_target(id, Word::new("stale").unwrap()).unwrap();
//!
//! for ch in "lapse".chars() {
//!     session.append_letter(ch);
//! }
//! let submission = session.submit(&AcceptAll).unwrap();
//!
//! assert_eq!(submission.feedback.tiers()[4], Tier::Correct);
//! assert_eq!(session.status(), GameStatus::InProgress);
//! assert_eq!(session.keyboard().tier(b'l'), Tier::Present);
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
