//! Core domain types for the game
//!
//! Words, per-letter feedback and the scoring function. Everything here is
//! pure and deterministic.

mod feedback;
mod scorer;
mod word;

pub use feedback::{GuessResult, LetterClassification};
pub use scorer::{ScoringMode, score, score_with};
pub use word::{WORD_LENGTH, Word, WordError};
