use std::path::{Path, PathBuf};

use crate::core::{ScoringMode, WORD_LENGTH, Word};
use crate::error::ConfigError;
use crate::game::{HINT_THRESHOLD, MAX_ATTEMPTS};
use crate::history::DEFAULT_STATS_FILE;
use crate::wordlists::loader::{load_lines, load_words, words_of_length};
use crate::wordlists::{CONGRATS, TARGETS, VALID};

/// Settings for a play session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_attempts: usize,
    pub hint_threshold: usize,
    pub hints_enabled: bool,
    pub scoring: ScoringMode,
    /// Target word file; `None` uses the embedded bank.
    pub targets_path: Option<PathBuf>,
    /// Hint candidate file; `None` uses the embedded bank.
    pub valid_path: Option<PathBuf>,
    /// Congratulatory messages file; `None` uses the embedded messages.
    pub messages_path: Option<PathBuf>,
    pub stats_path: PathBuf,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            word_length: WORD_LENGTH,
            max_attempts: MAX_ATTEMPTS,
            hint_threshold: HINT_THRESHOLD,
            hints_enabled: true,
            scoring: ScoringMode::Standard,
            targets_path: None,
            valid_path: None,
            messages_path: None,
            stats_path: PathBuf::from(DEFAULT_STATS_FILE),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::Validation("word_length must be > 0".into()));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::Validation("max_attempts must be > 0".into()));
        }
        if self.hint_threshold == 0 {
            return Err(ConfigError::Validation("hint_threshold must be > 0".into()));
        }
        Ok(())
    }

    /// Target words of the configured length. May be empty; the word source
    /// reports that before the first round.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WordList` if a configured file cannot be read.
    pub fn target_words(&self) -> Result<Vec<Word>, ConfigError> {
        match &self.targets_path {
            Some(path) => read_words(path, Some(self.word_length)),
            None => Ok(words_of_length(TARGETS, Some(self.word_length))),
        }
    }

    /// Hint candidates of any length.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WordList` if a configured file cannot be read.
    pub fn hint_words(&self) -> Result<Vec<Word>, ConfigError> {
        match &self.valid_path {
            Some(path) => read_words(path, None),
            None => Ok(words_of_length(VALID, None)),
        }
    }

    /// Congratulatory messages.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WordList` if a configured file cannot be read.
    pub fn messages(&self) -> Result<Vec<String>, ConfigError> {
        match &self.messages_path {
            Some(path) => load_lines(path).map_err(|source| ConfigError::WordList {
                path: path.clone(),
                source,
            }),
            None => Ok(CONGRATS.iter().map(|&m| m.to_string()).collect()),
        }
    }

    /// Name of the target list for error messages.
    #[must_use]
    pub fn targets_origin(&self) -> String {
        self.targets_path.as_ref().map_or_else(
            || "the embedded target list".to_string(),
            |p| p.display().to_string(),
        )
    }
}

fn read_words(path: &Path, length: Option<usize>) -> Result<Vec<Word>, ConfigError> {
    load_words(path, length).map_err(|source| ConfigError::WordList {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 6);
        assert_eq!(config.hint_threshold, 2);
        assert_eq!(config.stats_path, PathBuf::from("wordle_statistics.csv"));
    }

    #[test]
    fn zero_attempts_rejected() {
        let config = GameConfig {
            max_attempts: 0,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_attempts"));
    }

    #[test]
    fn zero_length_rejected() {
        let config = GameConfig {
            word_length: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn embedded_banks_load() {
        let config = GameConfig::default();
        assert!(!config.target_words().unwrap().is_empty());
        assert!(!config.hint_words().unwrap().is_empty());
        assert!(!config.messages().unwrap().is_empty());
    }

    #[test]
    fn other_length_filters_embedded_targets() {
        let config = GameConfig {
            word_length: 9,
            ..GameConfig::default()
        };
        assert!(config.target_words().unwrap().is_empty());
    }

    #[test]
    fn missing_word_file_reported() {
        let config = GameConfig {
            targets_path: Some(PathBuf::from("no/such/targets.txt")),
            ..GameConfig::default()
        };
        assert!(matches!(
            config.target_words(),
            Err(ConfigError::WordList { .. })
        ));
        assert_eq!(config.targets_origin(), "no/such/targets.txt");
    }
}
