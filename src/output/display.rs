//! Display functions for command results

use super::formatters::{format_keyboard, format_row, tiers_to_letters};
use crate::commands::ScoreResult;
use crate::game::{GameSession, GameStatus, Statistics};
use colored::Colorize;

/// Print the board and keyboard of a session
pub fn print_board(session: &GameSession) {
    println!();
    for row in session.rows() {
        let marker = if row.active { "▶".cyan() } else { " ".normal() };
        println!("  {marker} {}", format_row(&row));
    }
    println!();
    for line in format_keyboard(session.keyboard()) {
        println!("    {line}");
    }
    println!();
}

/// Print the end-of-game banner
pub fn print_game_over(session: &GameSession) {
    println!("{}", "═".repeat(50).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            let guesses = session.attempt_index() + 1;
            println!(
                "  {} Solved in {} {}",
                "🎉 YOU WON!".bright_green().bold(),
                guesses.to_string().bright_cyan().bold(),
                if guesses == 1 { "guess" } else { "guesses" }
            );
        }
        GameStatus::Lost => {
            let answer = session
                .revealed_target()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            println!(
                "  {} The word was {}",
                "YOU LOST!".bright_red().bold(),
                answer.bright_yellow().bold()
            );
        }
        GameStatus::InProgress => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());
}

/// Print running statistics
pub fn print_statistics(stats: &Statistics) {
    println!(
        "  Games: {} | Won: {} | Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );
    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        if count > 0 {
            println!("    {guesses}: {}", "█".repeat(count).green());
        }
    }
}

/// Print the result of scoring one guess
pub fn print_score_result(result: &ScoreResult) {
    println!(
        "\n{} vs {}",
        result.guess.to_uppercase().bright_white().bold(),
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("  {}", format_row(&result.row));
    println!(
        "  {}  {}",
        result.feedback.to_emoji(),
        tiers_to_letters(result.feedback.tiers()).bright_black()
    );
    if result.feedback.is_solved() {
        println!("{}", "✅ Exact match".green().bold());
    }
}
