//! Command implementations

pub mod history;
pub mod play;
pub mod score;

pub use history::summarize_history;
pub use play::{Session, run_play};
pub use score::{ScoreReport, score_words};
