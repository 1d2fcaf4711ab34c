//! Guess scoring
//!
//! [`score`] implements the duplicate-safe two-pass classification. Two
//! lenient variants are kept as explicit [`ScoringMode`]s for players who
//! want the older behaviour where a repeated guess letter can be credited
//! more times than it occurs in the target.

use super::{GuessResult, LetterClassification, Word};
use crate::error::GameError;
use rustc_hash::FxHashSet;
use std::fmt;

/// How a guess is classified against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringMode {
    /// Two-pass multiset scoring; every target letter is credited at most once
    #[default]
    Standard,
    /// Per-position check: misplaced whenever the letter occurs anywhere in the target
    Naive,
    /// Set arithmetic: misplaced letters are `guess ∩ target` minus letters
    /// already matched exactly somewhere in the guess
    LetterSet,
}

impl ScoringMode {
    /// Parse a mode from its CLI name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "standard" => Some(Self::Standard),
            "naive" => Some(Self::Naive),
            "letter-set" | "letterset" | "set" => Some(Self::LetterSet),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Naive => "naive",
            Self::LetterSet => "letter-set",
        }
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Score `guess` against `target` with the standard rules
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove those letters from the pool
/// 2. Second pass: mark misplaced letters while the pool still holds a copy
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{score, LetterClassification::*, Word};
///
/// let guess = Word::new("speed").unwrap();
/// let target = Word::new("abide").unwrap();
/// let result = score(&guess, &target).unwrap();
///
/// assert_eq!(result.classes(), &[Absent, Absent, Misplaced, Absent, Misplaced]);
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<GuessResult, GameError> {
    score_with(guess, target, ScoringMode::Standard)
}

/// Score `guess` against `target` using the given mode
///
/// # Errors
/// Returns `GameError::LengthMismatch` if the words differ in length.
pub fn score_with(
    guess: &Word,
    target: &Word,
    mode: ScoringMode,
) -> Result<GuessResult, GameError> {
    if guess.len() != target.len() {
        return Err(GameError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let classes = match mode {
        ScoringMode::Standard => two_pass(guess.letters(), target),
        ScoringMode::Naive => naive(guess.letters(), target),
        ScoringMode::LetterSet => letter_set(guess.letters(), target.letters()),
    };

    Ok(GuessResult::new(classes))
}

fn two_pass(guess: &[u8], target: &Word) -> Vec<LetterClassification> {
    let mut result = vec![LetterClassification::Absent; guess.len()];
    let mut available = target.letter_counts();

    for ((class, &g), &t) in result.iter_mut().zip(guess).zip(target.letters()) {
        if g == t {
            *class = LetterClassification::Exact;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    for (class, g) in result.iter_mut().zip(guess) {
        if *class == LetterClassification::Exact {
            continue;
        }
        if let Some(count) = available.get_mut(g)
            && *count > 0
        {
            *class = LetterClassification::Misplaced;
            *count -= 1;
        }
    }

    result
}

fn naive(guess: &[u8], target: &Word) -> Vec<LetterClassification> {
    guess
        .iter()
        .zip(target.letters())
        .map(|(&g, &t)| {
            if g == t {
                LetterClassification::Exact
            } else if target.has_letter(g) {
                LetterClassification::Misplaced
            } else {
                LetterClassification::Absent
            }
        })
        .collect()
}

fn letter_set(guess: &[u8], target: &[u8]) -> Vec<LetterClassification> {
    let exact: FxHashSet<u8> = guess
        .iter()
        .zip(target)
        .filter(|(g, t)| g == t)
        .map(|(&g, _)| g)
        .collect();
    let in_target: FxHashSet<u8> = target.iter().copied().collect();

    guess
        .iter()
        .zip(target)
        .map(|(&g, &t)| {
            if g == t {
                LetterClassification::Exact
            } else if in_target.contains(&g) && !exact.contains(&g) {
                LetterClassification::Misplaced
            } else {
                LetterClassification::Absent
            }
        })
        .collect()
}
