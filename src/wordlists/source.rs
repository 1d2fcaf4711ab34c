//! Target word selection

use crate::core::Word;
use crate::error::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;

/// Supplies one target word per round
pub trait WordSource {
    /// Pick the target for the next round
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySource` if there is nothing to pick from.
    fn next_target(&mut self) -> Result<Word, GameError>;
}

/// Pick a uniformly random word from `words`
///
/// # Errors
///
/// Returns `GameError::EmptySource` if `words` is empty.
pub fn pick_random_word<'a, R: Rng + ?Sized>(
    words: &'a [Word],
    rng: &mut R,
) -> Result<&'a Word, GameError> {
    words
        .choose(rng)
        .ok_or_else(|| GameError::EmptySource("word list".to_string()))
}

/// Pick a random message, or `None` if there are none
pub fn pick_random_message<'a, R: Rng + ?Sized>(
    messages: &'a [String],
    rng: &mut R,
) -> Option<&'a str> {
    messages.choose(rng).map(String::as_str)
}

/// Random targets drawn from an in-memory list
pub struct RandomWordSource<R> {
    words: Vec<Word>,
    rng: R,
}

impl<R: Rng> RandomWordSource<R> {
    /// Build a source over `words`
    ///
    /// `origin` names where the words came from and is only used in the error.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptySource` if `words` is empty, so an unusable
    /// list is reported before any round starts.
    pub fn new(words: Vec<Word>, rng: R, origin: &str) -> Result<Self, GameError> {
        if words.is_empty() {
            return Err(GameError::EmptySource(origin.to_string()));
        }
        Ok(Self { words, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordSource for RandomWordSource<R> {
    fn next_target(&mut self) -> Result<Word, GameError> {
        let word = pick_random_word(&self.words, &mut self.rng)?.clone();
        log::debug!("picked target from {} candidates", self.words.len());
        Ok(word)
    }
}
