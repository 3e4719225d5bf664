//! Per-run game statistics

use super::session::{GameSession, GameStatus};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// `guess_distribution[n]` counts wins in `n` guesses
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; unfinished sessions are ignored
    pub fn record(&mut self, session: &GameSession) {
        match session.status() {
            GameStatus::InProgress => {}
            GameStatus::Lost => self.total_games += 1,
            GameStatus::Won => {
                self.total_games += 1;
                self.games_won += 1;
                let guesses = session.attempt_index() + 1;
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
            }
        }
    }

    /// Win percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}
