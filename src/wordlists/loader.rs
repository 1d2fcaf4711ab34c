//! Word list loading utilities
//!
//! Line-oriented files: one entry per line, surrounding whitespace ignored,
//! blank lines skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Entries that are not valid words are skipped. When `length` is given,
/// words of any other length are skipped too.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_words;
///
/// let words = load_words("word-bank/target_words.txt", Some(5)).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P, length: Option<usize>) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_words(&content, length);
    log::debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Load the non-blank lines of a file, trimmed
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
pub fn load_lines<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

fn parse_words(content: &str, length: Option<usize>) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            match length {
                Some(len) => Word::with_length(trimmed, len).ok(),
                None => Word::new(trimmed).ok(),
            }
        })
        .collect()
}

/// Convert an embedded string slice to Words, optionally pinned to a length
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::words_of_length;
/// use wordle_game::wordlists::TARGETS;
///
/// let words = words_of_length(TARGETS, Some(5));
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_of_length(slice: &[&str], length: Option<usize>) -> Vec<Word> {
    slice
        .iter()
        .filter_map(|&s| match length {
            Some(len) => Word::with_length(s, len).ok(),
            None => Word::new(s).ok(),
        })
        .collect()
}

/// Convert an embedded string slice to Words of any length
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_of_length(slice, None)
}
