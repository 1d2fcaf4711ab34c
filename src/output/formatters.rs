//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterClassification, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, centered in a three-column cell
#[must_use]
pub fn tile(letter: char, class: LetterClassification) -> ColoredString {
    let cell = format!("{letter:^3}");
    let cell = cell.as_str().white();
    match class {
        LetterClassification::Exact => cell.on_green().bold(),
        LetterClassification::Misplaced => cell.on_yellow(),
        LetterClassification::Absent => cell.on_red(),
    }
}

/// Render a scored guess as a row of tiles separated by spaces
#[must_use]
pub fn format_tiles(guess: &Word, result: &GuessResult) -> String {
    guess
        .text()
        .chars()
        .zip(result.classes())
        .map(|(letter, &class)| tile(letter, class).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji grid of a round, one line per guess
#[must_use]
pub fn emoji_grid(history: &[(Word, GuessResult)]) -> String {
    history
        .iter()
        .map(|(_, result)| result.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width] before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((value / max) * width as f64).clamp(0.0, width as f64) as usize;

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
