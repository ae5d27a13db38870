//! Session statistics
//!
//! Kept in memory for one session; nothing is persisted.

use super::state::{GameState, Phase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub best_streak: usize,
    /// `guess_distribution[n]` counts wins on guess `n + 1`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            games_played: 0,
            games_won: 0,
            current_streak: 0,
            best_streak: 0,
            guess_distribution: vec![0; rows],
        }
    }

    /// Count a finished game
    ///
    /// Games still in progress are ignored.
    pub fn record(&mut self, state: &GameState) {
        match state.phase() {
            Phase::InProgress => {}
            Phase::Won => {
                self.games_played += 1;
                self.games_won += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);

                let guesses = state.row() + 1;
                if guesses > self.guess_distribution.len() {
                    self.guess_distribution.resize(guesses, 0);
                }
                self.guess_distribution[guesses - 1] += 1;
            }
            Phase::Lost => {
                self.games_played += 1;
                self.current_streak = 0;
            }
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
