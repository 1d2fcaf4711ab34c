//! Game flow
//!
//! The round state machine, hint selection and session statistics.

pub mod hint;
mod round;
mod stats;

pub use hint::{HINT_THRESHOLD, best_hint};
pub use round::{MAX_ATTEMPTS, Round, RoundOutcome, RoundStatus};
pub use stats::SessionStatistics;
