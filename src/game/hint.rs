//! Hint selection
//!
//! After each guess the player may be shown a dictionary word that shares
//! letters with it.

use crate::core::Word;

/// Default minimum match score for a hint
pub const HINT_THRESHOLD: usize = 2;

/// Candidates this short are never offered
const MIN_HINT_LENGTH: usize = 3;

/// Number of guess positions whose letter occurs somewhere in `candidate`
///
/// Repeated guess letters count once per position.
#[must_use]
pub fn match_score(guess: &Word, candidate: &Word) -> usize {
    guess
        .letters()
        .iter()
        .filter(|&&letter| candidate.has_letter(letter))
        .count()
}

/// Pick the candidate sharing the most letters with `guess`
///
/// Candidates shorter than three letters are skipped. Returns `None` unless
/// some candidate scores at least `threshold`. On a tie the first candidate
/// encountered is kept. Callers that don't want the guess or the target
/// offered back filter them out of `candidates`.
///
/// # Examples
/// ```
/// use wordle_game::core::Word;
/// use wordle_game::game::best_hint;
///
/// let guess = Word::new("crane").unwrap();
/// let words: Vec<Word> = ["ox", "cat", "near", "earn"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// assert_eq!(best_hint(&guess, &words, 2).map(Word::text), Some("NEAR"));
/// ```
pub fn best_hint<'a, I>(guess: &Word, candidates: I, threshold: usize) -> Option<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let mut best: Option<(&Word, usize)> = None;

    for candidate in candidates {
        if candidate.len() < MIN_HINT_LENGTH {
            continue;
        }
        let score = match_score(guess, candidate);
        if score >= threshold && best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((candidate, score));
        }
    }

    best.map(|(word, _)| word)
}
