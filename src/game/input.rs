//! Input events accepted by the game
//!
//! Physical key presses, clicks on the on-screen keyboard and typed lines all
//! end up as the same [`InputEvent`]s. Anything that is not a letter is
//! dropped here, before it reaches the session.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A lowercase ASCII letter
    Letter(char),
    Backspace,
    Enter,
}

impl InputEvent {
    /// Letter event for `ch`, or `None` if it is not an ASCII letter
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::InputEvent;
    ///
    /// assert_eq!(InputEvent::letter('Q'), Some(InputEvent::Letter('q')));
    /// assert_eq!(InputEvent::letter('7'), None);
    /// ```
    #[must_use]
    pub fn letter(ch: char) -> Option<Self> {
        ch.is_ascii_alphabetic()
            .then(|| Self::Letter(ch.to_ascii_lowercase()))
    }

    /// Events for a whole typed word: its letters followed by `Enter`
    ///
    /// Non-letters are skipped.
    #[must_use]
    pub fn from_line(line: &str) -> Vec<Self> {
        line.chars()
            .filter_map(Self::letter)
            .chain(std::iter::once(Self::Enter))
            .collect()
    }
}

/// Key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualKey {
    Letter(char),
    Enter,
    Backspace,
}

impl VirtualKey {
    #[must_use]
    pub fn label(self) -> String {
        match self {
            Self::Letter(ch) => ch.to_ascii_uppercase().to_string(),
            Self::Enter => "ENTER".to_string(),
            Self::Backspace => "⌫".to_string(),
        }
    }
}

impl From<VirtualKey> for InputEvent {
    fn from(key: VirtualKey) -> Self {
        match key {
            VirtualKey::Letter(ch) => Self::Letter(ch),
            VirtualKey::Enter => Self::Enter,
            VirtualKey::Backspace => Self::Backspace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_are_lowercased() {
        assert_eq!(InputEvent::letter('A'), Some(InputEvent::Letter('a')));
        assert_eq!(InputEvent::letter('z'), Some(InputEvent::Letter('z')));
    }

    #[test]
    fn non_letters_are_filtered() {
        for ch in ['1', ' ', '-', 'é', '\n'] {
            assert_eq!(InputEvent::letter(ch), None, "{ch:?} should be filtered");
        }
    }

    #[test]
    fn line_becomes_letters_then_enter() {
        let events = InputEvent::from_line(" Sta-le ");
        assert_eq!(
            events,
            vec![
                InputEvent::Letter('s'),
                InputEvent::Letter('t'),
                InputEvent::Letter('a'),
                InputEvent::Letter('l'),
                InputEvent::Letter('e'),
                InputEvent::Enter,
            ]
        );
    }

    #[test]
    fn virtual_keys_map_to_events() {
        assert_eq!(
            InputEvent::from(VirtualKey::Letter('k')),
            InputEvent::Letter('k')
        );
        assert_eq!(InputEvent::from(VirtualKey::Enter), InputEvent::Enter);
        assert_eq!(InputEvent::from(VirtualKey::Backspace), InputEvent::Backspace);
        assert_eq!(VirtualKey::Letter('k').label(), "K");
    }
}
