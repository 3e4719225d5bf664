//! Game state machine and its inputs
//!
//! [`GameSession`] is the single owner of game state. Front ends translate
//! their input into [`InputEvent`]s and render from the session's read-only
//! views.

mod config;
mod input;
mod session;
mod stats;

pub use config::{
    ConfigError, DEFAULT_MAX_ATTEMPTS, GameConfig, MAX_ATTEMPTS_LIMIT, MAX_WORD_LENGTH,
};
pub use input::{InputEvent, VirtualKey};
pub use session::{
    GameSession, GameStatus, InputOutcome, RowView, SessionError, SessionId, SubmitError,
    Submission,
};
pub use stats::Statistics;
