//! Terminal console
//!
//! Everything the player sees goes through [`Console`]. Scored guesses reach
//! it through the [`Renderer`] trait so the game loop never formats feedback
//! itself.

use super::formatters::{create_progress_bar, emoji_grid, format_tiles};
use crate::core::{GuessResult, Word};
use crate::error::GameError;
use crate::game::SessionStatistics;
use crate::history::HistorySummary;
use colored::Colorize;
use std::io::{self, Write};

/// Sink for already-scored guesses
pub trait Renderer {
    /// Show one guess with its classification
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the output cannot be written.
    fn render_guess(&mut self, guess: &Word, result: &GuessResult) -> io::Result<()>;
}

/// Colored terminal output over any writer
pub struct Console<W: Write> {
    out: W,
}

impl<W: Write> Console<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "═".repeat(60).cyan())?;
        writeln!(self.out, "{:^60}", "📝 WORDLE 📝".bright_white().bold())?;
        writeln!(self.out, "{}", "═".repeat(60).cyan())
    }

    pub fn greet(&mut self, name: &str) -> io::Result<()> {
        let name = if name.is_empty() { "stranger" } else { name };
        writeln!(self.out, "\n👋 Hey {}... Nice to E-Meet you!\n", name.bold())
    }

    pub fn instructions(&mut self, word_length: usize, max_attempts: usize) -> io::Result<()> {
        writeln!(self.out, "{}\n", "❗ Instructions".bold().underline())?;
        writeln!(self.out, "❗ Wordle is a single-player game")?;
        writeln!(
            self.out,
            "❗ Guess the hidden {word_length}-letter word. You have {max_attempts} attempts.\n"
        )?;
        writeln!(self.out, "❗ Your progress guide\n")?;
        writeln!(
            self.out,
            "   {}  The letter is in the word, in that position",
            "   ".on_green()
        )?;
        writeln!(
            self.out,
            "   {}  The letter is in the word, in a different position",
            "   ".on_yellow()
        )?;
        writeln!(self.out, "   {}  The letter is not in the word\n", "   ".on_red())?;
        writeln!(self.out, "🍀 Good luck 🍀\n")?;
        writeln!(self.out, "Let's play...")
    }

    /// Print a prompt without a trailing newline
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn invalid_guess(&mut self, error: &GameError, word_length: usize) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {error}. Please use a word with {word_length} letters, A-Z only.",
            "Sorry! Try again...".red()
        )
    }

    pub fn hint(&mut self, hint: Option<&Word>) -> io::Result<()> {
        match hint {
            Some(word) => writeln!(self.out, "🎁 Hint: {}", word.text().bright_cyan()),
            None => writeln!(self.out, "❌ Sorry, there is no hint word for this."),
        }
    }

    pub fn won(&mut self, message: Option<&str>, attempts: usize) -> io::Result<()> {
        if let Some(message) = message {
            writeln!(self.out, "\n📬 {message}")?;
        }
        writeln!(
            self.out,
            "\n🎉 {} ({} {})\n",
            "Yippee! You guessed the word correctly!".green().bold(),
            attempts,
            if attempts == 1 { "guess" } else { "guesses" }
        )
    }

    pub fn lost(&mut self, target: &Word) -> io::Result<()> {
        writeln!(
            self.out,
            "\n💀 Out of attempts. The word was {}\n",
            target.text().bright_yellow().bold()
        )
    }

    pub fn round_grid(&mut self, history: &[(Word, GuessResult)]) -> io::Result<()> {
        writeln!(self.out, "{}\n", emoji_grid(history))
    }

    pub fn write_failed(&mut self, error: &GameError) -> io::Result<()> {
        writeln!(
            self.out,
            "{} {error}",
            "⚠ Could not save statistics:".yellow()
        )
    }

    pub fn games_played(&mut self, stats: &SessionStatistics) -> io::Result<()> {
        writeln!(self.out, "Games played: {}", stats.total_games_played)
    }

    pub fn session_summary(&mut self, stats: &SessionStatistics) -> io::Result<()> {
        if let Some(average) = stats.average_guesses() {
            writeln!(self.out, "\n🎮 {}\n", "Your Game Statistics".bold())?;
            writeln!(self.out, "🎮 Games won: {}/{}", stats.games_won, stats.total_games_played)?;
            writeln!(self.out, "🎮 Average guesses per game: {average:.2}")?;
        }
        writeln!(
            self.out,
            "\nThanks for playing, hope to see you again for another challenge!\n"
        )
    }

    pub fn scored(&mut self, guess: &Word, result: &GuessResult) -> io::Result<()> {
        self.render_guess(guess, result)?;
        writeln!(self.out, "{}", result.to_emoji())?;
        let values: Vec<String> = result.values().iter().map(u8::to_string).collect();
        writeln!(self.out, "[{}]", values.join(", "))
    }

    pub fn history_summary(&mut self, summary: &HistorySummary) -> io::Result<()> {
        writeln!(self.out, "\n{}", "═".repeat(60).cyan())?;
        writeln!(self.out, " {} ", "GAME HISTORY".bright_cyan().bold())?;
        writeln!(self.out, "{}", "═".repeat(60).cyan())?;

        let Some(average) = summary.average_guesses() else {
            return writeln!(self.out, "\nNo games recorded yet.");
        };

        writeln!(self.out, "\n   Games played:     {}", summary.games)?;
        writeln!(
            self.out,
            "   Average guesses:  {}",
            format!("{average:.2}").bright_yellow().bold()
        )?;

        writeln!(self.out, "\n📈 {}", "Distribution:".bright_cyan().bold())?;
        for (&attempts, &count) in &summary.distribution {
            let pct = count as f64 / summary.games as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            writeln!(self.out, "   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green())?;
        }
        Ok(())
    }
}

impl<W: Write> Renderer for Console<W> {
    fn render_guess(&mut self, guess: &Word, result: &GuessResult) -> io::Result<()> {
        writeln!(self.out, "{}", format_tiles(guess, result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::score;

    fn rendered(f: impl FnOnce(&mut Console<Vec<u8>>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut console = Console::new(Vec::new());
        f(&mut console).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn renders_guess_tiles() {
        let guess = Word::new("speed").unwrap();
        let result = score(&guess, &Word::new("abide").unwrap()).unwrap();
        let out = rendered(|c| c.render_guess(&guess, &result));
        assert_eq!(out, " S   P   E   E   D \n");
    }

    #[test]
    fn scored_shows_numeric_values() {
        let guess = Word::new("hello").unwrap();
        let result = score(&guess, &Word::new("world").unwrap()).unwrap();
        let out = rendered(|c| c.scored(&guess, &result));
        assert!(out.contains("[0, 0, 0, 2, 1]"));
    }

    #[test]
    fn hint_lines() {
        let word = Word::new("stale").unwrap();
        assert!(rendered(|c| c.hint(Some(&word))).contains("Hint: STALE"));
        assert!(rendered(|c| c.hint(None)).contains("no hint word"));
    }

    #[test]
    fn lost_reveals_target() {
        let target = Word::new("crane").unwrap();
        assert!(rendered(|c| c.lost(&target)).contains("The word was CRANE"));
    }

    #[test]
    fn summary_includes_average() {
        let stats = SessionStatistics {
            total_games_played: 2,
            total_guesses: 8,
            games_won: 2,
        };
        let out = rendered(|c| c.session_summary(&stats));
        assert!(out.contains("Average guesses per game: 4.00"));
    }

    #[test]
    fn summary_without_games_skips_statistics() {
        let out = rendered(|c| c.session_summary(&SessionStatistics::new()));
        assert!(!out.contains("Average"));
        assert!(out.contains("Thanks for playing"));
    }

    #[test]
    fn empty_history_summary() {
        let out = rendered(|c| c.history_summary(&HistorySummary::default()));
        assert!(out.contains("No games recorded yet."));
    }
}
