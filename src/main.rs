//! Wordle Game - CLI
//!
//! Play Wordle in the terminal, score single guesses, or review past games.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use wordle_game::{
    commands::{run_play, score_words, summarize_history},
    config::GameConfig,
    core::{ScoringMode, WORD_LENGTH},
    game::{HINT_THRESHOLD, MAX_ATTEMPTS},
    history::DEFAULT_STATS_FILE,
    output::Console,
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of attempts",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Scoring: standard (default), naive, letter-set
    #[arg(short, long, global = true, default_value = "standard")]
    scoring: String,

    /// Target word file (default: embedded list)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Hint dictionary file (default: embedded list)
    #[arg(long, global = true)]
    valid: Option<PathBuf>,

    /// Congratulatory messages file (default: embedded list)
    #[arg(long, global = true)]
    messages: Option<PathBuf>,

    /// Statistics log
    #[arg(long, global = true, default_value = DEFAULT_STATS_FILE)]
    stats_file: PathBuf,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = WORD_LENGTH)]
    length: usize,

    /// Attempts per round
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    attempts: usize,

    /// Minimum shared letters for a hint
    #[arg(long, global = true, default_value_t = HINT_THRESHOLD)]
    hint_threshold: usize,

    /// Don't show hint words
    #[arg(long, global = true)]
    no_hints: bool,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively (default)
    Play,

    /// Score a single guess against a target
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// Summarize the statistics log
    History,
}

impl Cli {
    fn scoring_mode(&self) -> Result<ScoringMode> {
        ScoringMode::from_name(&self.scoring).ok_or_else(|| {
            anyhow!(
                "Unknown scoring mode '{}' (expected standard, naive or letter-set)",
                self.scoring
            )
        })
    }

    fn game_config(&self) -> Result<GameConfig> {
        Ok(GameConfig {
            word_length: self.length,
            max_attempts: self.attempts,
            hint_threshold: self.hint_threshold,
            hints_enabled: !self.no_hints,
            scoring: self.scoring_mode()?,
            targets_path: self.targets.clone(),
            valid_path: self.valid.clone(),
            messages_path: self.messages.clone(),
            stats_path: self.stats_file.clone(),
            seed: self.seed,
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            run_play(cli.game_config()?)?;
            Ok(())
        }
        Commands::Score { guess, target } => {
            let report = score_words(&guess, &target, cli.scoring_mode()?)?;
            Console::new(io::stdout()).scored(&report.guess, &report.result)?;
            Ok(())
        }
        Commands::History => {
            let summary = summarize_history(&cli.stats_file)?;
            Console::new(io::stdout()).history_summary(&summary)?;
            Ok(())
        }
    }
}
