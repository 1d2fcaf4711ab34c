//! Wordle Game
//!
//! A terminal word-guessing game with duplicate-safe scoring, hints and
//! session statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::Word;
//! use wordle_game::game::{Round, RoundStatus};
//!
//! let mut round = Round::new(Word::new("crane").unwrap(), 6);
//!
//! // Malformed input is rejected without using an attempt
//! assert!(round.submit_guess("cr4ne").is_err());
//! assert_eq!(round.attempts_made(), 0);
//!
//! let result = round.submit_guess("crane").unwrap();
//! assert!(result.is_all_exact());
//! assert_eq!(round.status(), RoundStatus::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine, hints and statistics
pub mod game;

// Word banks and target selection
pub mod wordlists;

// Persisted round history
pub mod history;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;
