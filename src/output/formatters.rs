//! Formatting utilities for terminal output

use crate::core::{Keyboard, Tier};
use crate::game::RowView;
use colored::{ColoredString, Colorize};

/// Color a single letter tile by its tier
#[must_use]
pub fn tile(letter: Option<char>, tier: Tier) -> ColoredString {
    let text = format!(" {} ", letter.map_or('_', |c| c.to_ascii_uppercase()));
    match tier {
        Tier::Unused => text.normal(),
        Tier::Absent => text.white().on_bright_black(),
        Tier::Present => text.black().on_yellow().bold(),
        Tier::Correct => text.black().on_green().bold(),
    }
}

/// Render a board row as colored tiles
#[must_use]
pub fn format_row(row: &RowView) -> String {
    row.letters
        .iter()
        .zip(&row.tiers)
        .map(|(&letter, &tier)| tile(letter, tier).to_string())
        .collect()
}

/// Render the keyboard as three colored lines, indented like a real keyboard
#[must_use]
pub fn format_keyboard(keyboard: &Keyboard) -> Vec<String> {
    keyboard
        .rows()
        .enumerate()
        .map(|(i, row)| {
            let keys: String = row
                .into_iter()
                .map(|(letter, tier)| tile(Some(letter), tier).to_string())
                .collect();
            format!("{}{keys}", " ".repeat(i * 2))
        })
        .collect()
}

/// Plain-text rendering of tiers, for logs and tests
///
/// `G` correct, `Y` present, `-` absent, `.` unused.
#[must_use]
pub fn tiers_to_letters(tiers: &[Tier]) -> String {
    tiers
        .iter()
        .map(|tier| match tier {
            Tier::Correct => 'G',
            Tier::Present => 'Y',
            Tier::Absent => '-',
            Tier::Unused => '.',
        })
        .collect()
}
