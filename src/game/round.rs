//! Round controller
//!
//! A `Round` drives repeated guesses against one target word. Malformed
//! guesses are rejected without using an attempt; every accepted guess is
//! scored and appended to the history until the round is won or the attempt
//! limit is reached.

use crate::core::{GuessResult, ScoringMode, Word, score_with};
use crate::error::GameError;

/// Default number of accepted guesses per round
pub const MAX_ATTEMPTS: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    AwaitingGuess,
    Won,
    Lost,
}

/// Summary of a finished round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub target: Word,
    pub attempts: usize,
    pub won: bool,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    max_attempts: usize,
    mode: ScoringMode,
    history: Vec<(Word, GuessResult)>,
}

impl Round {
    /// Start a round against `target` with standard scoring
    #[must_use]
    pub const fn new(target: Word, max_attempts: usize) -> Self {
        Self::with_mode(target, max_attempts, ScoringMode::Standard)
    }

    #[must_use]
    pub const fn with_mode(target: Word, max_attempts: usize, mode: ScoringMode) -> Self {
        Self {
            target,
            max_attempts,
            mode,
            history: Vec::new(),
        }
    }

    /// Validate, score and record a guess
    ///
    /// # Errors
    ///
    /// - `GameError::InvalidGuessFormat` if the input is the wrong length or
    ///   not purely alphabetic; no attempt is consumed
    /// - `GameError::RoundOver` if the round has already finished
    pub fn submit_guess(&mut self, raw_input: &str) -> Result<GuessResult, GameError> {
        if self.is_over() {
            return Err(GameError::RoundOver);
        }

        let guess = Word::with_length(raw_input, self.target.len())?;
        let result = score_with(&guess, &self.target, self.mode)?;

        log::debug!(
            "attempt {}/{}: {} -> {}",
            self.history.len() + 1,
            self.max_attempts,
            guess,
            result.to_emoji()
        );

        self.history.push((guess, result.clone()));
        Ok(result)
    }

    /// True iff the most recent guess is the target
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(guess, _)| *guess == self.target)
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.is_won() || self.history.len() >= self.max_attempts
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        if self.is_won() {
            RoundStatus::Won
        } else if self.is_over() {
            RoundStatus::Lost
        } else {
            RoundStatus::AwaitingGuess
        }
    }

    #[inline]
    #[must_use]
    pub fn attempts_made(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        self.max_attempts.saturating_sub(self.history.len())
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, GuessResult)] {
        &self.history
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Close a finished round
    ///
    /// # Errors
    ///
    /// Returns `GameError::RoundInProgress` if the round is not over yet.
    pub fn finalize(self) -> Result<RoundOutcome, GameError> {
        if !self.is_over() {
            return Err(GameError::RoundInProgress);
        }
        let won = self.is_won();
        Ok(RoundOutcome {
            attempts: self.history.len(),
            target: self.target,
            won,
        })
    }
}
