//! History summary command
//!
//! Aggregates the statistics log written by play sessions.

use crate::history::{HistorySummary, read_records};
use anyhow::{Context, Result};
use std::path::Path;

/// Summarize the log at `path`; a missing log is an empty history
///
/// # Errors
///
/// Returns an error if the log exists but cannot be read.
pub fn summarize_history(path: &Path) -> Result<HistorySummary> {
    let records = read_records(path)
        .with_context(|| format!("failed to read statistics log {}", path.display()))?;
    Ok(HistorySummary::from_records(&records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn summarizes_log_file() {
        let path = std::env::temp_dir().join(format!("wordle_summary_{}.csv", std::process::id()));
        fs::write(&path, "CRANE:3\nSLATE:5\n").unwrap();

        let summary = summarize_history(&path).unwrap();
        assert_eq!(summary.games, 2);
        assert_eq!(summary.average_guesses(), Some(4.0));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_log_is_empty() {
        let summary = summarize_history(Path::new("no/such/log.csv")).unwrap();
        assert_eq!(summary.games, 0);
    }
}
