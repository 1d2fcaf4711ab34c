//! Session statistics
//!
//! Running totals for the life of the process, folded in once per finished round.

use super::RoundOutcome;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStatistics {
    pub total_games_played: usize,
    pub total_guesses: usize,
    pub games_won: usize,
}

impl SessionStatistics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a finished round into the totals
    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.record_attempts(outcome.attempts, outcome.won);
    }

    pub(crate) fn record_attempts(&mut self, attempts: usize, won: bool) {
        self.total_games_played += 1;
        self.total_guesses += attempts;
        if won {
            self.games_won += 1;
        }
    }

    /// Average guesses per game, or `None` before the first game
    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.total_games_played > 0)
            .then(|| self.total_guesses as f64 / self.total_games_played as f64)
    }
}
