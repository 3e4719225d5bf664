//! Simple text-mode game
//!
//! Line-based play without the TUI: each line is one guess.

use crate::game::{GameSession, InputEvent, InputOutcome, Statistics};
use crate::output::{print_board, print_game_over, print_statistics};
use crate::wordlists::{WordSource, WordValidator};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Run the text-mode game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing the prompt fails.
pub fn run_simple<S, V>(session: GameSession, source: &mut S, validator: &V) -> Result<Statistics>
where
    S: WordSource + ?Sized,
    V: WordValidator + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║              W O R D L E                     ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries. Type a word and press Enter.",
        session.config().word_length,
        session.config().max_attempts
    );
    println!("Commands: ':new' for a new game, ':quit' to exit\n");

    let stdin = io::stdin();
    play_lines(session, source, validator, stdin.lock())
}

/// Game loop over any line source
///
/// # Errors
///
/// Returns an error if reading a line or flushing stdout fails.
pub fn play_lines<S, V, R>(
    mut session: GameSession,
    source: &mut S,
    validator: &V,
    input: R,
) -> Result<Statistics>
where
    S: WordSource + ?Sized,
    V: WordValidator + ?Sized,
    R: BufRead,
{
    let mut stats = Statistics::default();
    new_game(&mut session, source);
    let mut lines = input.lines();

    loop {
        print_board(&session);
        if session.status().is_over() {
            println!("Type ':new' for another game or ':quit' to exit.");
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                new_game(&mut session, source);
                continue;
            }
            _ => {}
        }

        // A rejected guess stays in the buffer; each line starts fresh
        while session.delete_letter() {}

        for event in InputEvent::from_line(&line) {
            match session.handle(event, validator) {
                InputOutcome::Submitted(submission) if submission.status.is_over() => {
                    print_board(&session);
                    print_game_over(&session);
                    stats.record(&session);
                    print_statistics(&stats);
                }
                InputOutcome::Rejected(err) => println!("{} {err}", "❌".red()),
                _ => {}
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Reset the session and fetch its target word
fn new_game<S>(session: &mut GameSession, source: &mut S)
where
    S: WordSource + ?Sized,
{
    let id = session.reset();
    match source.random_word() {
        Ok(word) => {
            if let Err(err) = session.install_target(id, word) {
                warn!(%err, "could not install target word");
            }
        }
        Err(err) => {
            warn!(%err, "could not pick a target word");
            println!("{} {err}. Type ':new' to retry.", "❌".red());
        }
    }
}
