//! Per-letter feedback for a scored guess
//!
//! Each position of a guess is classified as one of:
//! - 2 = Exact (letter in the correct position)
//! - 1 = Misplaced (letter in the word, wrong position)
//! - 0 = Absent (letter not in the word, or every copy already claimed)

use std::fmt;

/// Verdict for one letter at one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterClassification {
    Absent,
    Misplaced,
    Exact,
}

impl LetterClassification {
    /// Numeric score (Exact = 2, Misplaced = 1, Absent = 0)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Exact => 2,
            Self::Misplaced => 1,
            Self::Absent => 0,
        }
    }

    /// Inverse of [`LetterClassification::value`]
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            2 => Some(Self::Exact),
            1 => Some(Self::Misplaced),
            0 => Some(Self::Absent),
            _ => None,
        }
    }

    /// Square emoji used in shareable summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '🟥',
        }
    }
}

/// Feedback for a whole guess, positionally aligned with it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult(Vec<LetterClassification>);

impl GuessResult {
    #[must_use]
    pub const fn new(classes: Vec<LetterClassification>) -> Self {
        Self(classes)
    }

    /// Classifications in guess order
    #[inline]
    #[must_use]
    pub fn classes(&self) -> &[LetterClassification] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when every position is an exact match
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&c| c == LetterClassification::Exact)
    }

    #[must_use]
    pub fn count_exact(&self) -> usize {
        self.count(LetterClassification::Exact)
    }

    #[must_use]
    pub fn count_misplaced(&self) -> usize {
        self.count(LetterClassification::Misplaced)
    }

    fn count(&self, class: LetterClassification) -> usize {
        self.0.iter().filter(|&&c| c == class).count()
    }

    /// Numeric 2/1/0 form, one entry per position
    #[must_use]
    pub fn values(&self) -> Vec<u8> {
        self.0.iter().map(|c| c.value()).collect()
    }

    /// Convert to an emoji string like "🟥🟥🟨🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|c| c.emoji()).collect()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::LetterClassification::{Absent, Exact, Misplaced};
    use super::*;

    #[test]
    fn classification_values_round_trip_known_ordinals() {
        assert_eq!(Exact.value(), 2);
        assert_eq!(Misplaced.value(), 1);
        assert_eq!(Absent.value(), 0);
        assert_eq!(LetterClassification::from_value(2), Some(Exact));
        assert_eq!(LetterClassification::from_value(3), None);
    }

    #[test]
    fn classification_ordering_follows_strength() {
        assert!(Exact > Misplaced);
        assert!(Misplaced > Absent);
    }

    #[test]
    fn result_counts() {
        let result = GuessResult::new(vec![Absent, Absent, Misplaced, Exact, Misplaced]);
        assert_eq!(result.count_exact(), 1);
        assert_eq!(result.count_misplaced(), 2);
        assert_eq!(result.values(), vec![0, 0, 1, 2, 1]);
        assert!(!result.is_all_exact());
    }

    #[test]
    fn result_all_exact() {
        assert!(GuessResult::new(vec![Exact; 5]).is_all_exact());
        assert!(!GuessResult::new(Vec::new()).is_all_exact());
    }

    #[test]
    fn result_emoji() {
        let result = GuessResult::new(vec![Exact, Misplaced, Absent]);
        assert_eq!(result.to_emoji(), "🟩🟨🟥");
        assert_eq!(format!("{result}"), "🟩🟨🟥");
    }
}
