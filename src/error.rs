use std::path::PathBuf;

use crate::core::WordError;

/// Errors raised by the game core and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Malformed guess; the player is re-prompted and no attempt is used.
    #[error("invalid guess: {0}")]
    InvalidGuessFormat(#[from] WordError),

    #[error("guess has {guess} letters but the target has {target}")]
    LengthMismatch { guess: usize, target: usize },

    #[error("no words available in {0}")]
    EmptySource(String),

    #[error("failed to write statistics to {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("the round is already over")]
    RoundOver,

    #[error("the round is still in progress")]
    RoundInProgress,
}

/// Errors that can occur when building the game configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read word list {path}: {source}")]
    WordList {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config validation error: {0}")]
    Validation(String),
}
