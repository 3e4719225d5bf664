//! Interactive TUI front end
//!
//! The app owns the [`GameSession`](crate::game::GameSession); target words
//! and the dictionary arrive from the background [`Loader`].

mod app;
mod rendering;
pub mod worker;

pub use app::{App, Message, MessageStyle, run_tui};
pub use rendering::key_at;
pub use worker::{DictionarySource, Loader};
