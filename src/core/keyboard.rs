//! On-screen keyboard colors
//!
//! Each letter remembers the best tier it has been revealed with. Tiers only
//! move forward; a `Present` letter can still become `Correct` but never goes
//! back to `Absent`.

use super::{Feedback, Tier, Word};

/// Key rows of the on-screen keyboard
pub const KEY_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Best-known tier per letter `a..=z`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyboard {
    tiers: [Tier; 26],
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    /// All letters start `Unused`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tiers: [Tier::Unused; 26],
        }
    }

    /// Current tier of a lowercase letter
    ///
    /// Anything outside `a..=z` reports `Unused`.
    #[must_use]
    pub fn tier(&self, letter: u8) -> Tier {
        Self::index(letter).map_or(Tier::Unused, |i| self.tiers[i])
    }

    /// Raise `letter` to `candidate` if that is an upgrade
    ///
    /// - `Correct` letters stay `Correct`.
    /// - `Present` letters only move to `Correct`.
    /// - Everything else takes the candidate, except that a candidate can
    ///   never lower the current tier.
    ///
    /// Returns true when the tier changed.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Keyboard, Tier};
    ///
    /// let mut keys = Keyboard::new();
    /// assert!(keys.promote(b'e', Tier::Present));
    /// assert!(!keys.promote(b'e', Tier::Absent));
    /// assert_eq!(keys.tier(b'e'), Tier::Present);
    /// ```
    pub fn promote(&mut self, letter: u8, candidate: Tier) -> bool {
        let Some(i) = Self::index(letter) else {
            return false;
        };
        let current = self.tiers[i];
        let allowed = match current {
            Tier::Correct => false,
            Tier::Present => candidate == Tier::Correct,
            Tier::Unused | Tier::Absent => candidate > current,
        };
        if allowed {
            self.tiers[i] = candidate;
        }
        allowed
    }

    /// Promote every letter of a revealed row by its feedback
    pub fn apply(&mut self, word: &Word, feedback: &Feedback) {
        for (&letter, &tier) in word.letters().iter().zip(feedback.tiers()) {
            self.promote(letter, tier);
        }
    }

    /// Forget everything
    pub fn reset(&mut self) {
        self.tiers = [Tier::Unused; 26];
    }

    /// Letters paired with their tiers, row by row in keyboard order
    pub fn rows(&self) -> impl Iterator<Item = Vec<(char, Tier)>> + '_ {
        KEY_ROWS.iter().map(move |row| {
            row.bytes()
                .map(|letter| (char::from(letter), self.tier(letter)))
                .collect()
        })
    }

    fn index(letter: u8) -> Option<usize> {
        letter
            .is_ascii_lowercase()
            .then(|| usize::from(letter - b'a'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MatchRule, TargetWord};
    use proptest::prelude::*;

    #[test]
    fn fresh_keyboard_is_unused() {
        let keys = Keyboard::new();
        for letter in b'a'..=b'z' {
            assert_eq!(keys.tier(letter), Tier::Unused);
        }
    }

    #[test]
    fn present_is_not_downgraded() {
        let mut keys = Keyboard::new();
        keys.promote(b'e', Tier::Present);
        assert!(!keys.promote(b'e', Tier::Absent));
        assert_eq!(keys.tier(b'e'), Tier::Present);
        assert!(keys.promote(b'e', Tier::Correct));
        assert_eq!(keys.tier(b'e'), Tier::Correct);
    }

    #[test]
    fn correct_is_final() {
        let mut keys = Keyboard::new();
        keys.promote(b's', Tier::Correct);
        assert!(!keys.promote(b's', Tier::Present));
        assert!(!keys.promote(b's', Tier::Absent));
        assert_eq!(keys.tier(b's'), Tier::Correct);
    }

    #[test]
    fn absent_can_be_upgraded() {
        let mut keys = Keyboard::new();
        keys.promote(b'a', Tier::Absent);
        assert!(keys.promote(b'a', Tier::Present));
        assert_eq!(keys.tier(b'a'), Tier::Present);
    }

    #[test]
    fn unused_candidate_never_lowers() {
        let mut keys = Keyboard::new();
        keys.promote(b'q', Tier::Absent);
        assert!(!keys.promote(b'q', Tier::Unused));
        assert_eq!(keys.tier(b'q'), Tier::Absent);
    }

    #[test]
    fn non_letters_are_ignored() {
        let mut keys = Keyboard::new();
        assert!(!keys.promote(b'1', Tier::Correct));
        assert!(!keys.promote(b'E', Tier::Correct));
        assert_eq!(keys.tier(b'1'), Tier::Unused);
    }

    #[test]
    fn apply_row_feedback() {
        let target = TargetWord::new(Word::new("stale").unwrap());
        let guess = Word::new("lapse").unwrap();
        let feedback = Feedback::evaluate(&guess, &target, MatchRule::Membership);

        let mut keys = Keyboard::new();
        keys.apply(&guess, &feedback);

        assert_eq!(keys.tier(b'l'), Tier::Present);
        assert_eq!(keys.tier(b'p'), Tier::Absent);
        assert_eq!(keys.tier(b'e'), Tier::Correct);
        assert_eq!(keys.tier(b'z'), Tier::Unused);
    }

    #[test]
    fn reset_clears_everything() {
        let mut keys = Keyboard::new();
        keys.promote(b'x', Tier::Correct);
        keys.reset();
        assert_eq!(keys, Keyboard::new());
    }

    #[test]
    fn rows_follow_qwerty_layout() {
        let keys = Keyboard::new();
        let rows: Vec<_> = keys.rows().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0][0], ('q', Tier::Unused));
        assert_eq!(rows[2].len(), 7);
        let total: usize = rows.iter().map(Vec::len).sum();
        assert_eq!(total, 26);
    }

    fn tier_strategy() -> impl Strategy<Value = Tier> {
        prop_oneof![
            Just(Tier::Unused),
            Just(Tier::Absent),
            Just(Tier::Present),
            Just(Tier::Correct),
        ]
    }

    proptest! {
        #[test]
        fn tiers_never_decrease(ops in proptest::collection::vec((b'a'..=b'z', tier_strategy()), 0..64)) {
            let mut keys = Keyboard::new();
            for (letter, candidate) in ops {
                let before = keys.tier(letter);
                keys.promote(letter, candidate);
                prop_assert!(keys.tier(letter) >= before);
            }
        }
    }
}
