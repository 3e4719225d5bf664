//! Terminal output formatting
//!
//! Colored rows, keyboard and result printing for the text-mode commands.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_game_over, print_score_result, print_statistics};
