//! Interactive play session
//!
//! Greets the player, then plays rounds until they decline a replay or the
//! input ends. Statistics are folded in once per finished round.

use crate::config::GameConfig;
use crate::core::Word;
use crate::error::GameError;
use crate::game::{Round, RoundOutcome, SessionStatistics, best_hint};
use crate::history::{FileStatsLog, StatsWriter};
use crate::output::{Console, Renderer};
use crate::wordlists::{RandomWordSource, WordSource, pick_random_message};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{self, BufRead, Write};

/// State threaded through a play session
pub struct Session<S, L, R, G> {
    config: GameConfig,
    source: S,
    log: L,
    renderer: G,
    hint_words: Vec<Word>,
    messages: Vec<String>,
    rng: R,
    stats: SessionStatistics,
}

impl<S: WordSource, L: StatsWriter, R: Rng, G: Renderer> Session<S, L, R, G> {
    pub fn new(
        config: GameConfig,
        source: S,
        log: L,
        renderer: G,
        hint_words: Vec<Word>,
        messages: Vec<String>,
        rng: R,
    ) -> Self {
        Self {
            config,
            source,
            log,
            renderer,
            hint_words,
            messages,
            rng,
            stats: SessionStatistics::new(),
        }
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStatistics {
        &self.stats
    }

    /// Run the whole session: greeting, rounds, replay prompts and summary
    ///
    /// # Errors
    ///
    /// Returns an error if the word source fails or the console cannot be
    /// read or written. Statistics write failures are reported and ignored.
    pub fn run<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        console: &mut Console<W>,
    ) -> Result<SessionStatistics> {
        console.banner()?;
        console.prompt(
            "\nWelcome to Wordle\nLet's get to know each other a little more before we get started!\nWhat's your name? ",
        )?;
        let name = read_input(input)?.unwrap_or_default();
        console.greet(&name)?;
        console.instructions(self.config.word_length, self.config.max_attempts)?;

        while self.play_round(input, console)?.is_some() {
            console.prompt("\nDo you want to play again? Y/N ")?;
            let answer = read_input(input)?.unwrap_or_default().to_lowercase();
            if !matches!(answer.as_str(), "y" | "yes") {
                break;
            }
        }

        console.session_summary(&self.stats)?;
        Ok(self.stats.clone())
    }

    /// Play a single round
    ///
    /// Returns `None` if the input ended before the round finished; such a
    /// round is not recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the word source fails or the console cannot be
    /// read or written.
    pub fn play_round<I: BufRead, W: Write>(
        &mut self,
        input: &mut I,
        console: &mut Console<W>,
    ) -> Result<Option<RoundOutcome>> {
        let target = self.source.next_target()?;
        log::trace!("round target: {target}");

        let message = pick_random_message(&self.messages, &mut self.rng).map(str::to_string);
        let mut round = Round::with_mode(target, self.config.max_attempts, self.config.scoring);

        while !round.is_over() {
            console.prompt(&format!("\n🔒 Guess {}: ", round.attempts_made() + 1))?;
            let Some(raw) = read_input(input)? else {
                log::debug!("input closed mid-round");
                return Ok(None);
            };

            let result = match round.submit_guess(&raw) {
                Ok(result) => result,
                Err(e @ GameError::InvalidGuessFormat(_)) => {
                    console.invalid_guess(&e, self.config.word_length)?;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            if let Some((guess, _)) = round.history().last() {
                self.renderer.render_guess(guess, &result)?;
                if self.config.hints_enabled && !round.is_over() {
                    let target = round.target();
                    let hint = best_hint(
                        guess,
                        self.hint_words
                            .iter()
                            .filter(|w| *w != guess && *w != target),
                        self.config.hint_threshold,
                    );
                    console.hint(hint)?;
                }
            }
        }

        if round.is_won() {
            console.won(message.as_deref(), round.attempts_made())?;
        } else {
            console.lost(round.target())?;
        }
        console.round_grid(round.history())?;

        let outcome = round.finalize()?;
        self.finish_round(&outcome, console)?;
        Ok(Some(outcome))
    }

    fn finish_round<W: Write>(
        &mut self,
        outcome: &RoundOutcome,
        console: &mut Console<W>,
    ) -> io::Result<()> {
        if let Err(e) = self.log.append_record(&outcome.target, outcome.attempts) {
            log::warn!("{e}");
            console.write_failed(&e)?;
        }
        self.stats.record(outcome);
        console.games_played(&self.stats)
    }
}

/// Read one trimmed line, or `None` at end of input
///
/// Bytes that are not UTF-8 are replaced rather than rejected, so the round
/// sees the line and refuses it as a malformed guess.
fn read_input<I: BufRead>(input: &mut I) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Play on the terminal with the given configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid, a word list cannot be
/// read, the target list is empty, or the terminal fails.
pub fn run_play(config: GameConfig) -> Result<SessionStatistics> {
    config.validate()?;

    let targets = config.target_words()?;
    let hint_words = config.hint_words()?;
    let messages = config.messages()?;

    let (target_rng, message_rng) = match config.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_os_rng(), StdRng::from_os_rng()),
    };

    let source = RandomWordSource::new(targets, target_rng, &config.targets_origin())?;
    log::info!(
        "starting session: {} targets, {} hint words, {} scoring",
        source.len(),
        hint_words.len(),
        config.scoring
    );

    let log = FileStatsLog::new(config.stats_path.clone());
    let renderer = Console::new(io::stdout());
    let mut session = Session::new(
        config,
        source,
        log,
        renderer,
        hint_words,
        messages,
        message_rng,
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut console = Console::new(io::stdout());
    session.run(&mut input, &mut console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessResult, LetterClassification};
    use crate::history::MemoryStatsLog;
    use crate::wordlists::loader::words_from_slice;
    use std::collections::VecDeque;
    use std::io::Cursor;
    use std::path::PathBuf;

    struct ScriptedSource(VecDeque<Word>);

    impl ScriptedSource {
        fn new(words: &[&str]) -> Self {
            Self(words_from_slice(words).into())
        }
    }

    impl WordSource for ScriptedSource {
        fn next_target(&mut self) -> Result<Word, GameError> {
            self.0
                .pop_front()
                .ok_or_else(|| GameError::EmptySource("script".to_string()))
        }
    }

    struct FailingLog;

    impl StatsWriter for FailingLog {
        fn append_record(&mut self, _target: &Word, _attempts: usize) -> Result<(), GameError> {
            Err(GameError::WriteError {
                path: PathBuf::from("/read-only/stats.csv"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    #[derive(Default)]
    struct RecordingRenderer(Vec<(Word, GuessResult)>);

    impl Renderer for RecordingRenderer {
        fn render_guess(&mut self, guess: &Word, result: &GuessResult) -> io::Result<()> {
            self.0.push((guess.clone(), result.clone()));
            Ok(())
        }
    }

    type TestSession<L> = Session<ScriptedSource, L, StdRng, RecordingRenderer>;

    fn session<L: StatsWriter>(targets: &[&str], log: L) -> TestSession<L> {
        Session::new(
            GameConfig::default(),
            ScriptedSource::new(targets),
            log,
            RecordingRenderer::default(),
            words_from_slice(&["stale", "crane", "least"]),
            vec!["Well done!".to_string()],
            StdRng::seed_from_u64(1),
        )
    }

    fn play<L: StatsWriter>(
        session: &mut TestSession<L>,
        script: impl AsRef<[u8]>,
    ) -> (Result<SessionStatistics>, String) {
        colored::control::set_override(false);
        let mut input = Cursor::new(script.as_ref().to_vec());
        let mut console = Console::new(Vec::new());
        let result = session.run(&mut input, &mut console);
        let output = String::from_utf8(console.into_inner()).unwrap();
        (result, output)
    }

    #[test]
    fn win_records_attempts() {
        let mut session = session(&["crane"], MemoryStatsLog::default());
        let (result, output) = play(&mut session, "Ann\nslate\ncrane\nn\n");

        let stats = result.unwrap();
        assert_eq!(stats.total_games_played, 1);
        assert_eq!(stats.total_guesses, 2);
        assert_eq!(stats.games_won, 1);
        assert_eq!(session.log.records.len(), 1);
        assert_eq!(session.log.records[0].to_string(), "CRANE:2");
        assert!(output.contains("Hey Ann"));
        assert!(output.contains("Well done!"));
        assert!(output.contains("Yippee"));
        assert!(output.contains("Games played: 1"));
    }

    #[test]
    fn invalid_guesses_do_not_use_attempts() {
        let mut session = session(&["crane"], MemoryStatsLog::default());
        let (result, output) = play(&mut session, "Ann\nabcd\nab3de\ncrane\nn\n");

        assert_eq!(result.unwrap().total_guesses, 1);
        assert_eq!(output.matches("Sorry! Try again").count(), 2);
        assert_eq!(output.matches("Guess 1:").count(), 3);
    }

    #[test]
    fn non_utf8_guess_is_rejected_without_ending_session() {
        let mut session = session(&["crane"], MemoryStatsLog::default());
        let (result, output) = play(&mut session, b"Ann\ncr\xe2ne\ncrane\nn\n");

        let stats = result.unwrap();
        assert_eq!(stats.total_guesses, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(output.matches("Sorry! Try again").count(), 1);
    }

    #[test]
    fn renderer_receives_each_accepted_guess() {
        let mut session = session(&["crane"], MemoryStatsLog::default());
        let (result, _) = play(&mut session, "Ann\nslate\nab3de\ncrane\nn\n");
        result.unwrap();

        let rendered = &session.renderer.0;
        assert_eq!(rendered.len(), 2);
        assert_eq!(rendered[0].0.text(), "SLATE");
        assert_eq!(
            rendered[0].1.classes()[2],
            LetterClassification::Exact
        );
        assert!(rendered[1].1.is_all_exact());
    }

    #[test]
    fn loss_reveals_target_after_max_attempts() {
        let mut session = session(&["crane"], MemoryStatsLog::default());
        let script = format!("Ann\n{}n\n", "slate\n".repeat(6));
        let (result, output) = play(&mut session, &script);

        let stats = result.unwrap();
        assert_eq!(stats.total_guesses, 6);
        assert_eq!(stats.games_won, 0);
        assert!(output.contains("The word was CRANE"));
        assert!(!output.contains("Guess 7:"));
    }

    #[test]
    fn hint_excludes_target_and_guess() {
        let mut session = session(&["crane"], MemoryStatsLog::default());
        let (_, output) = play(&mut session, "Ann\nslate\ncrane\nn\n");

        assert!(output.contains("Hint: STALE") || output.contains("Hint: LEAST"));
        assert!(!output.contains("Hint: CRANE"));
    }

    #[test]
    fn two_rounds_average() {
        let mut session = session(&["crane", "slate"], MemoryStatsLog::default());
        let script = "Ann\nirate\nstale\ncrane\ny\ncrane\nirate\nstale\nleast\nslate\nno\n";
        let (result, output) = play(&mut session, script);

        let stats = result.unwrap();
        assert_eq!(stats.total_games_played, 2);
        assert_eq!(stats.total_guesses, 8);
        assert_eq!(stats.average_guesses(), Some(4.0));
        assert!(output.contains("Average guesses per game: 4.00"));
    }

    #[test]
    fn write_failure_does_not_interrupt_play() {
        let mut session = session(&["crane", "slate"], FailingLog);
        let (result, output) = play(&mut session, "Ann\ncrane\nyes\nslate\nn\n");

        let stats = result.unwrap();
        assert_eq!(stats.total_games_played, 2);
        assert_eq!(output.matches("Could not save statistics").count(), 2);
    }

    #[test]
    fn input_ending_mid_round_records_nothing() {
        let mut session = session(&["crane"], MemoryStatsLog::default());
        let (result, output) = play(&mut session, "Ann\nslate\n");

        let stats = result.unwrap();
        assert_eq!(stats.total_games_played, 0);
        assert!(session.log.records.is_empty());
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn exhausted_source_is_an_error() {
        let mut session = session(&[], MemoryStatsLog::default());
        let (result, _) = play(&mut session, "Ann\n");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::EmptySource(_))
        ));
    }

    #[test]
    fn empty_target_list_fails_before_play() {
        let config = GameConfig {
            word_length: 9,
            ..GameConfig::default()
        };
        let err = run_play(config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GameError>(),
            Some(GameError::EmptySource(_))
        ));
    }
}
