//! Letter color tiers
//!
//! Ordered from least to most informative, so `Ord` gives the promotion order
//! used by the keyboard: `Unused < Absent < Present < Correct`.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Tier {
    /// Not yet revealed
    #[default]
    Unused,
    /// Letter does not occur in the target
    Absent,
    /// Letter occurs in the target at another position
    Present,
    /// Letter is at this exact position in the target
    Correct,
}

impl Tier {
    /// Emoji square for the tier
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Unused => '⬛',
            Self::Absent => '⬜',
            Self::Present => '🟨',
            Self::Correct => '🟩',
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unused => "unused",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}
