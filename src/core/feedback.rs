//! Per-letter feedback for a revealed row
//!
//! Two rules are available:
//! - [`MatchRule::Membership`]: a letter that is not in place is `Present`
//!   whenever it occurs anywhere in the target. Repeats are never downgraded,
//!   so guessing "speed" against "steal" marks both E's.
//! - [`MatchRule::Exact`]: the conventional rule. Exact matches claim their
//!   letters first, then misplaced letters draw from what is left.

use super::{TargetWord, Tier, Word};

/// How misplaced letters are matched against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchRule {
    /// Simple membership check against the letter-frequency map
    #[default]
    Membership,
    /// Per-occurrence matching that consumes letter counts
    Exact,
}

/// Colors for one row, one tier per position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback(Vec<Tier>);

impl Feedback {
    /// Evaluate `guess` against the target
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, MatchRule, TargetWord, Tier, Word};
    ///
    /// let target = TargetWord::new(Word::new("stale").unwrap());
    /// let guess = Word::new("lapse").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target, MatchRule::Membership);
    ///
    /// use Tier::*;
    /// assert_eq!(feedback.tiers(), &[Present, Present, Absent, Present, Correct]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &TargetWord, rule: MatchRule) -> Self {
        match rule {
            MatchRule::Membership => Self::membership(guess, target),
            MatchRule::Exact => Self::exact(guess, target),
        }
    }

    fn membership(guess: &Word, target: &TargetWord) -> Self {
        let answer = target.word().letters();
        let tiers = guess
            .letters()
            .iter()
            .enumerate()
            .map(|(i, &letter)| {
                if answer.get(i) == Some(&letter) {
                    Tier::Correct
                } else if target.frequency().contains(letter) {
                    Tier::Present
                } else {
                    Tier::Absent
                }
            })
            .collect();
        Self(tiers)
    }

    fn exact(guess: &Word, target: &TargetWord) -> Self {
        let answer = target.word().letters();
        let mut available = target.frequency().counts();
        let mut tiers = vec![Tier::Absent; guess.len()];

        // Exact positions claim their letters first
        for (i, &letter) in guess.letters().iter().enumerate() {
            if answer.get(i) == Some(&letter) {
                tiers[i] = Tier::Correct;
                if let Some(count) = available.get_mut(&letter) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (i, &letter) in guess.letters().iter().enumerate() {
            if tiers[i] == Tier::Correct {
                continue;
            }
            if let Some(count) = available.get_mut(&letter)
                && *count > 0
            {
                tiers[i] = Tier::Present;
                *count -= 1;
            }
        }

        Self(tiers)
    }

    /// A row that has not been revealed yet
    #[must_use]
    pub fn hidden(length: usize) -> Self {
        Self(vec![Tier::Unused; length])
    }

    #[inline]
    #[must_use]
    pub fn tiers(&self) -> &[Tier] {
        &self.0
    }

    /// Whether every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&t| t == Tier::Correct)
    }

    /// Count positions with the given tier
    #[must_use]
    pub fn count(&self, tier: Tier) -> usize {
        self.0.iter().filter(|&&t| t == tier).count()
    }

    /// Render as emoji squares, e.g. "🟨🟨⬜🟨🟩"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}
