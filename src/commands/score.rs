//! One-shot scoring command
//!
//! Scores a single guess against a given target without starting a round.

use crate::core::{GuessResult, ScoringMode, Word, score_with};
use anyhow::{Result, anyhow};

/// Result of scoring one guess
#[derive(Debug)]
pub struct ScoreReport {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Score `guess` against `target`
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn score_words(guess: &str, target: &str, mode: ScoringMode) -> Result<ScoreReport> {
    let guess = Word::new(guess).map_err(|e| anyhow!("Invalid guess: {e}"))?;
    let target = Word::new(target).map_err(|e| anyhow!("Invalid target: {e}"))?;
    let result = score_with(&guess, &target, mode)?;

    Ok(ScoreReport {
        guess,
        target,
        result,
    })
}
