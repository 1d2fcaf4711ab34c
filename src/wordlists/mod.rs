//! Word banks and target selection
//!
//! Provides the embedded banks, file loading and the [`WordSource`]
//! abstraction rounds draw their targets from.

mod embedded;
pub mod loader;
mod source;

pub use embedded::{CONGRATS, CONGRATS_COUNT, TARGETS, TARGETS_COUNT, VALID, VALID_COUNT};
pub use source::{RandomWordSource, WordSource, pick_random_message, pick_random_word};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{WORD_LENGTH, Word};

    #[test]
    fn counts_match_consts() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
        assert_eq!(VALID.len(), VALID_COUNT);
        assert_eq!(CONGRATS.len(), CONGRATS_COUNT);
    }

    #[test]
    fn targets_are_round_words() {
        for &word in TARGETS {
            assert!(
                Word::with_length(word, WORD_LENGTH).is_ok(),
                "Target '{word}' is not a {WORD_LENGTH}-letter word"
            );
        }
    }

    #[test]
    fn valid_words_are_words() {
        for &word in VALID {
            assert!(Word::new(word).is_ok(), "Valid word '{word}' is malformed");
        }
    }

    #[test]
    fn targets_subset_of_valid() {
        let valid: std::collections::HashSet<_> = VALID.iter().collect();
        for target in TARGETS {
            assert!(valid.contains(target), "Target '{target}' not in valid list");
        }
    }

    #[test]
    fn congrats_not_blank() {
        assert!(!CONGRATS.is_empty());
        assert!(CONGRATS.iter().all(|m| !m.trim().is_empty()));
    }
}
