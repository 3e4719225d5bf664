//! One-shot feedback for a guess against a known target

use crate::core::{Feedback, TargetWord, Word, WordError};
use crate::game::{GameConfig, RowView};

/// Feedback for a single guess
#[derive(Debug, Clone)]
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub feedback: Feedback,
    pub row: RowView,
}

/// Color `guess` against `target` using the configured rule
///
/// # Errors
///
/// Returns `WordError` if either word is not a valid word of the configured
/// length.
///
/// # Examples
/// ```
/// use wordle_game::commands::score_guess;
/// use wordle_game::game::GameConfig;
///
/// let result = score_guess("lapse", "stale", &GameConfig::default()).unwrap();
/// assert_eq!(result.feedback.to_emoji(), "🟨🟨⬜🟨🟩");
/// ```
pub fn score_guess(guess: &str, target: &str, config: &GameConfig) -> Result<ScoreResult, WordError> {
    let guess = Word::with_length(guess, config.word_length)?;
    let target = TargetWord::new(Word::with_length(target, config.word_length)?);
    let feedback = Feedback::evaluate(&guess, &target, config.rule);

    let row = RowView {
        letters: guess.letters().iter().map(|&l| Some(char::from(l))).collect(),
        tiers: feedback.tiers().to_vec(),
        active: false,
    };

    Ok(ScoreResult {
        guess: guess.text().to_string(),
        target: target.word().text().to_string(),
        feedback,
        row,
    })
}
