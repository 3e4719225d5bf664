//! Guess state machine
//!
//! A [`GameSession`] owns everything about one game: the target word, the
//! guess history, the in-progress attempt and the keyboard colors. Front ends
//! feed it [`InputEvent`]s and read it back for rendering.
//!
//! A session starts without a target. The word is delivered later through
//! [`GameSession::install_target`], tagged with the [`SessionId`] it was
//! requested for, so a reply that arrives after a reset is dropped instead of
//! leaking into the new game.

use super::config::{ConfigError, GameConfig};
use super::input::InputEvent;
use crate::core::{Feedback, Keyboard, TargetWord, Tier, Word};
use crate::wordlists::{Validity, WordValidator};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info, trace};

/// Identifies one game between resets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission was turned down
///
/// All of these leave the session untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Still picking a word, try again in a moment")]
    NotReady,
    #[error("The game is over")]
    GameOver,
    #[error("Words must be {required} letters to check")]
    Incomplete { filled: usize, required: usize },
    #[error("'{}' is not in the word list", .0.to_uppercase())]
    InvalidWord(String),
    #[error("Word list is still loading, try again in a moment")]
    CheckUnavailable,
}

/// Why a target word was not installed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("word for session {received} arrived after reset to {current}")]
    Stale {
        received: SessionId,
        current: SessionId,
    },
    #[error("target word must be {expected} letters, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("session {0} already has a target word")]
    AlreadyInstalled(SessionId),
}

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Board row the guess was recorded in
    pub row: usize,
    pub word: Word,
    pub feedback: Feedback,
    /// Status after the submission
    pub status: GameStatus,
}

/// What a single input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// A letter was added or removed
    Edited,
    /// Nothing happened (full row, empty row, or game over)
    Ignored,
    Submitted(Submission),
    Rejected(SubmitError),
}

/// One board row prepared for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub letters: Vec<Option<char>>,
    pub tiers: Vec<Tier>,
    /// The row currently being typed into
    pub active: bool,
}

/// State of one game
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    session: SessionId,
    target: Option<TargetWord>,
    history: Vec<Option<Word>>,
    attempt: Vec<Option<u8>>,
    cursor: usize,
    attempt_index: usize,
    status: GameStatus,
    keyboard: Keyboard,
}

impl GameSession {
    /// Create a session that is waiting for its target word
    ///
    /// Request a word for [`Self::session_id`] and hand it to
    /// [`Self::install_target`].
    ///
    /// # Errors
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            session: SessionId(0),
            target: None,
            history: vec![None; config.max_attempts],
            attempt: vec![None; config.word_length],
            cursor: 0,
            attempt_index: 0,
            status: GameStatus::InProgress,
            keyboard: Keyboard::new(),
        })
    }

    /// Start over: clear the board and forget the target
    ///
    /// Returns the new session id; request a fresh target word for it.
    pub fn reset(&mut self) -> SessionId {
        self.session = SessionId(self.session.0 + 1);
        self.target = None;
        self.history.fill(None);
        self.clear_attempt();
        self.attempt_index = 0;
        self.status = GameStatus::InProgress;
        self.keyboard.reset();
        debug!(session = %self.session, "game reset");
        self.session
    }

    /// Install the target word requested for `session`
    ///
    /// # Errors
    /// - `Stale` if the session has been reset since the word was requested
    /// - `WrongLength` if the word does not fit the board
    /// - `AlreadyInstalled` if this session already has its word
    pub fn install_target(&mut self, session: SessionId, word: Word) -> Result<(), SessionError> {
        if session != self.session {
            debug!(received = %session, current = %self.session, "ignoring stale target word");
            return Err(SessionError::Stale {
                received: session,
                current: self.session,
            });
        }
        if word.len() != self.config.word_length {
            return Err(SessionError::WrongLength {
                expected: self.config.word_length,
                actual: word.len(),
            });
        }
        if self.target.is_some() {
            return Err(SessionError::AlreadyInstalled(session));
        }
        debug!(session = %session, "target word installed");
        self.target = Some(TargetWord::new(word));
        Ok(())
    }

    /// Write a letter at the cursor
    ///
    /// Returns false (and does nothing) if the row is full, the game is over,
    /// or `ch` is not an ASCII letter.
    pub fn append_letter(&mut self, ch: char) -> bool {
        if self.status.is_over() || self.cursor >= self.config.word_length {
            return false;
        }
        if !ch.is_ascii_alphabetic() {
            return false;
        }
        self.attempt[self.cursor] = Some(ch.to_ascii_lowercase() as u8);
        self.cursor += 1;
        true
    }

    /// Clear the last filled letter
    ///
    /// Returns false (and does nothing) if the row is empty or the game is over.
    pub fn delete_letter(&mut self) -> bool {
        if self.status.is_over() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.attempt[self.cursor] = None;
        true
    }

    /// Submit the current attempt
    ///
    /// A correct guess wins even if the validator does not know the word.
    /// Otherwise the word must pass `validator`; the last allowed attempt then
    /// loses the game, any earlier one moves on to the next row. Every
    /// accepted row is colored and promoted onto the keyboard.
    ///
    /// # Errors
    /// Returns a `SubmitError` describing the rejection; the session is left
    /// unchanged in that case.
    pub fn submit<V>(&mut self, validator: &V) -> Result<Submission, SubmitError>
    where
        V: WordValidator + ?Sized,
    {
        let result = self.try_submit(validator);
        match &result {
            Ok(submission) => info!(
                row = submission.row,
                word = %submission.word,
                feedback = %submission.feedback.to_emoji(),
                status = ?submission.status,
                "attempt submitted"
            ),
            Err(err) => debug!(%err, "submission rejected"),
        }
        trace!(session = ?self, "state after submit");
        result
    }

    fn try_submit<V>(&mut self, validator: &V) -> Result<Submission, SubmitError>
    where
        V: WordValidator + ?Sized,
    {
        if self.status.is_over() {
            return Err(SubmitError::GameOver);
        }
        let Some(target) = &self.target else {
            return Err(SubmitError::NotReady);
        };
        let Some(guess) = self.current_word() else {
            return Err(SubmitError::Incomplete {
                filled: self.cursor,
                required: self.config.word_length,
            });
        };

        let status = if guess == *target.word() {
            GameStatus::Won
        } else {
            match validator.check(&guess) {
                Validity::Valid => {}
                Validity::Invalid => return Err(SubmitError::InvalidWord(guess.text().into())),
                Validity::Unavailable => return Err(SubmitError::CheckUnavailable),
            }
            if self.attempt_index + 1 == self.config.max_attempts {
                GameStatus::Lost
            } else {
                GameStatus::InProgress
            }
        };

        let feedback = Feedback::evaluate(&guess, target, self.config.rule);
        self.keyboard.apply(&guess, &feedback);

        let row = self.attempt_index;
        self.history[row] = Some(guess.clone());
        self.status = status;
        if status == GameStatus::InProgress {
            self.attempt_index += 1;
            self.clear_attempt();
        }

        Ok(Submission {
            row,
            word: guess,
            feedback,
            status,
        })
    }

    /// Route one input event
    pub fn handle<V>(&mut self, event: InputEvent, validator: &V) -> InputOutcome
    where
        V: WordValidator + ?Sized,
    {
        let edited = match event {
            InputEvent::Letter(ch) => self.append_letter(ch),
            InputEvent::Backspace => self.delete_letter(),
            InputEvent::Enter => {
                return match self.submit(validator) {
                    Ok(submission) => InputOutcome::Submitted(submission),
                    Err(err) => InputOutcome::Rejected(err),
                };
            }
        };
        if edited {
            InputOutcome::Edited
        } else {
            InputOutcome::Ignored
        }
    }

    /// Rows of the board, top to bottom
    ///
    /// Submitted rows are colored. The row being typed stays neutral.
    #[must_use]
    pub fn rows(&self) -> Vec<RowView> {
        (0..self.config.max_attempts)
            .map(|i| {
                if i == self.attempt_index && !self.status.is_over() {
                    RowView {
                        letters: self.attempt.iter().map(|l| l.map(char::from)).collect(),
                        tiers: vec![Tier::Unused; self.config.word_length],
                        active: true,
                    }
                } else if let Some(word) = &self.history[i] {
                    RowView {
                        letters: word.letters().iter().map(|&l| Some(char::from(l))).collect(),
                        tiers: self.reveal(word).tiers().to_vec(),
                        active: false,
                    }
                } else {
                    RowView {
                        letters: vec![None; self.config.word_length],
                        tiers: vec![Tier::Unused; self.config.word_length],
                        active: false,
                    }
                }
            })
            .collect()
    }

    /// Feedback for a recorded word (hidden if no target is set)
    fn reveal(&self, word: &Word) -> Feedback {
        self.target.as_ref().map_or_else(
            || Feedback::hidden(word.len()),
            |target| Feedback::evaluate(word, target, self.config.rule),
        )
    }

    fn current_word(&self) -> Option<Word> {
        if self.cursor < self.config.word_length {
            return None;
        }
        let text: String = self.attempt.iter().flatten().map(|&l| char::from(l)).collect();
        Word::with_length(text, self.config.word_length).ok()
    }

    fn clear_attempt(&mut self) {
        self.attempt.fill(None);
        self.cursor = 0;
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn session_id(&self) -> SessionId {
        self.session
    }

    /// Whether a target word is installed
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.target.is_some()
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Submitted guesses; always `max_attempts` slots, `None` for blanks
    #[must_use]
    pub fn history(&self) -> &[Option<Word>] {
        &self.history
    }

    /// The in-progress attempt, letter by letter
    #[must_use]
    pub fn attempt(&self) -> &[Option<u8>] {
        &self.attempt
    }

    /// Number of letters typed into the current attempt
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zero-based row of the current attempt
    #[must_use]
    pub const fn attempt_index(&self) -> usize {
        self.attempt_index
    }

    #[must_use]
    pub const fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    /// The target word, only once the game has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        if self.status.is_over() {
            self.target.as_ref().map(TargetWord::word)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchRule;
    use crate::wordlists::{AcceptAll, Lexicon};
    use proptest::prelude::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn ready_session(target: &str) -> GameSession {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let id = session.session_id();
        session.install_target(id, word(target)).unwrap();
        session
    }

    fn type_word(session: &mut GameSession, text: &str) {
        for ch in text.chars() {
            session.append_letter(ch);
        }
    }

    fn play(session: &mut GameSession, text: &str) -> Result<Submission, SubmitError> {
        type_word(session, text);
        session.submit(&AcceptAll)
    }

    #[test]
    fn new_session_is_not_ready() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        assert!(!session.is_ready());
        assert_eq!(session.history().len(), 6);

        type_word(&mut session, "stale");
        assert_eq!(session.submit(&AcceptAll), Err(SubmitError::NotReady));
        assert_eq!(session.cursor(), 5);
    }

    #[test]
    fn append_stops_at_word_length() {
        let mut session = ready_session("stale");
        type_word(&mut session, "lapse");
        let before = session.attempt().to_vec();

        assert!(!session.append_letter('x'));
        assert_eq!(session.attempt(), before.as_slice());
        assert_eq!(session.cursor(), 5);
    }

    #[test]
    fn delete_on_empty_is_noop() {
        let mut session = ready_session("stale");
        assert!(!session.delete_letter());
        assert_eq!(session.cursor(), 0);
        assert!(session.attempt().iter().all(Option::is_none));
    }

    #[test]
    fn delete_clears_last_letter() {
        let mut session = ready_session("stale");
        type_word(&mut session, "lap");
        assert!(session.delete_letter());
        assert_eq!(session.cursor(), 2);
        assert_eq!(session.attempt()[2], None);
        assert_eq!(session.attempt()[1], Some(b'a'));
    }

    #[test]
    fn incomplete_attempt_is_rejected() {
        let mut session = ready_session("stale");
        type_word(&mut session, "lap");
        assert_eq!(
            session.submit(&AcceptAll),
            Err(SubmitError::Incomplete {
                filled: 3,
                required: 5
            })
        );
        assert_eq!(session.attempt_index(), 0);
    }

    #[test]
    fn wrong_guess_advances_row() {
        let mut session = ready_session("stale");
        let submission = play(&mut session, "lapse").unwrap();

        use Tier::{Absent, Correct, Present};
        assert_eq!(submission.row, 0);
        assert_eq!(
            submission.feedback.tiers(),
            &[Present, Present, Absent, Present, Correct]
        );
        assert_eq!(submission.status, GameStatus::InProgress);
        assert_eq!(session.attempt_index(), 1);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.history()[0], Some(word("lapse")));
        assert_eq!(session.keyboard().tier(b'e'), Tier::Correct);
        assert_eq!(session.keyboard().tier(b'p'), Tier::Absent);
        assert_eq!(session.revealed_target(), None);
    }

    #[test]
    fn correct_guess_wins_and_locks_input() {
        let mut session = ready_session("stale");
        let submission = play(&mut session, "stale").unwrap();

        assert!(submission.feedback.is_solved());
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.history()[0], Some(word("stale")));

        assert!(!session.append_letter('a'));
        assert!(!session.delete_letter());
        assert_eq!(session.submit(&AcceptAll), Err(SubmitError::GameOver));
        assert_eq!(session.revealed_target(), Some(&word("stale")));
    }

    #[test]
    fn correct_guess_wins_even_if_unknown_to_validator() {
        let mut session = ready_session("stale");
        type_word(&mut session, "stale");
        let submission = session.submit(&Lexicon::pending()).unwrap();
        assert_eq!(submission.status, GameStatus::Won);
    }

    #[test]
    fn six_misses_lose() {
        let mut session = ready_session("stale");
        for guess in ["crane", "lapse", "robot", "fudge", "mango", "quilt"] {
            assert_eq!(session.status(), GameStatus::InProgress);
            play(&mut session, guess).unwrap();
        }

        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.attempt_index(), 5);
        assert_eq!(session.history().len(), 6);
        assert!(session.history().iter().all(Option::is_some));
        assert_eq!(session.revealed_target(), Some(&word("stale")));
        assert!(!session.append_letter('a'));
    }

    #[test]
    fn invalid_word_leaves_state_unchanged() {
        let mut session = ready_session("stale");
        let lexicon = Lexicon::from_words(&[word("stale"), word("lapse")]);
        type_word(&mut session, "xyzzy");

        assert_eq!(
            session.submit(&lexicon),
            Err(SubmitError::InvalidWord("xyzzy".into()))
        );
        assert_eq!(session.cursor(), 5);
        assert_eq!(session.attempt_index(), 0);
        assert_eq!(session.keyboard().tier(b'x'), Tier::Unused);
    }

    #[test]
    fn unavailable_checker_is_recoverable() {
        let mut session = ready_session("stale");
        let mut lexicon = Lexicon::pending();
        type_word(&mut session, "lapse");

        assert_eq!(session.submit(&lexicon), Err(SubmitError::CheckUnavailable));
        assert_eq!(session.attempt_index(), 0);
        assert_eq!(session.history()[0], None);

        lexicon.fill(&[word("lapse")]);
        assert!(session.submit(&lexicon).is_ok());
        assert_eq!(session.attempt_index(), 1);
    }

    #[test]
    fn excess_repeat_does_not_downgrade_keyboard() {
        let config = GameConfig {
            rule: MatchRule::Exact,
            ..GameConfig::default()
        };
        let mut session = GameSession::new(config).unwrap();
        let id = session.session_id();
        session.install_target(id, word("steal")).unwrap();

        // STEAL has one E: the first E is Present, the later ones Absent
        let first = play(&mut session, "eerie").unwrap();
        use Tier::{Absent, Present};
        assert_eq!(
            first.feedback.tiers(),
            &[Present, Absent, Absent, Absent, Absent]
        );
        assert_eq!(session.keyboard().tier(b'e'), Tier::Present);
        assert_eq!(session.keyboard().tier(b'r'), Tier::Absent);

        play(&mut session, "crown").unwrap();
        assert_eq!(session.keyboard().tier(b'e'), Tier::Present);

        play(&mut session, "speed").unwrap();
        assert_eq!(session.keyboard().tier(b'e'), Tier::Correct);
    }

    #[test]
    fn reset_reinitializes_everything() {
        let mut session = ready_session("stale");
        play(&mut session, "lapse").unwrap();
        type_word(&mut session, "cr");
        let old = session.session_id();

        let new = session.reset();

        assert_ne!(old, new);
        assert!(!session.is_ready());
        assert!(session.history().iter().all(Option::is_none));
        assert_eq!(session.history().len(), 6);
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.attempt_index(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.keyboard(), &Keyboard::new());
    }

    #[test]
    fn stale_target_is_ignored() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let first = session.session_id();
        let second = session.reset();

        assert_eq!(
            session.install_target(first, word("crane")),
            Err(SessionError::Stale {
                received: first,
                current: second
            })
        );
        assert!(!session.is_ready());

        session.install_target(second, word("stale")).unwrap();
        assert!(session.is_ready());
        assert_eq!(
            session.install_target(second, word("crane")),
            Err(SessionError::AlreadyInstalled(second))
        );
    }

    #[test]
    fn target_must_fit_board() {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let id = session.session_id();
        let long = Word::with_length("planet", 6).unwrap();
        assert_eq!(
            session.install_target(id, long),
            Err(SessionError::WrongLength {
                expected: 5,
                actual: 6
            })
        );
    }

    #[test]
    fn rows_hide_active_row_until_game_over() {
        let mut session = ready_session("stale");
        play(&mut session, "lapse").unwrap();
        type_word(&mut session, "sta");

        let rows = session.rows();
        assert_eq!(rows.len(), 6);
        assert!(!rows[0].active);
        assert_eq!(rows[0].tiers[4], Tier::Correct);
        assert!(rows[1].active);
        assert_eq!(rows[1].letters[..3], [Some('s'), Some('t'), Some('a')]);
        assert!(rows[1].tiers.iter().all(|&t| t == Tier::Unused));
        assert!(rows[2].letters.iter().all(Option::is_none));

        type_word(&mut session, "le");
        session.submit(&AcceptAll).unwrap();
        let rows = session.rows();
        assert!(rows.iter().all(|row| !row.active));
        assert!(rows[1].tiers.iter().all(|&t| t == Tier::Correct));
    }

    #[test]
    fn handle_routes_events() {
        let mut session = ready_session("stale");
        for event in InputEvent::from_line("stale") {
            let outcome = session.handle(event, &AcceptAll);
            if event == InputEvent::Enter {
                assert!(matches!(outcome, InputOutcome::Submitted(_)));
            } else {
                assert_eq!(outcome, InputOutcome::Edited);
            }
        }
        assert_eq!(
            session.handle(InputEvent::Letter('a'), &AcceptAll),
            InputOutcome::Ignored
        );
        assert_eq!(
            session.handle(InputEvent::Enter, &AcceptAll),
            InputOutcome::Rejected(SubmitError::GameOver)
        );
    }

    #[test]
    fn custom_board_size() {
        let config = GameConfig {
            word_length: 3,
            max_attempts: 2,
            rule: MatchRule::Membership,
        };
        let mut session = GameSession::new(config).unwrap();
        let id = session.session_id();
        session
            .install_target(id, Word::with_length("cat", 3).unwrap())
            .unwrap();

        assert_eq!(session.history().len(), 2);
        play(&mut session, "dog").unwrap();
        let last = play(&mut session, "cot").unwrap();
        assert_eq!(last.status, GameStatus::Lost);
    }

    fn event_strategy() -> impl Strategy<Value = InputEvent> {
        prop_oneof![
            6 => (b'a'..=b'z').prop_map(|b| InputEvent::Letter(char::from(b))),
            2 => Just(InputEvent::Backspace),
            1 => Just(InputEvent::Enter),
        ]
    }

    proptest! {
        #[test]
        fn invariants_hold_for_any_input(events in proptest::collection::vec(event_strategy(), 0..200)) {
            let mut session = ready_session("stale");
            let mut previous = session.keyboard().clone();

            for event in events {
                session.handle(event, &AcceptAll);

                prop_assert_eq!(session.history().len(), 6);
                prop_assert!(session.cursor() <= 5);
                prop_assert!(session.attempt_index() < 6);
                for letter in b'a'..=b'z' {
                    prop_assert!(session.keyboard().tier(letter) >= previous.tier(letter));
                }
                previous = session.keyboard().clone();
            }
        }
    }
}
