//! Persisted round history
//!
//! Every finished round appends one `TARGET:attempts` line to a log file.
//! A failed write is reported to the caller but never affects the round.

mod log_file;

pub use log_file::{DEFAULT_STATS_FILE, FileStatsLog, read_records};

use crate::core::Word;
use crate::error::GameError;
use std::collections::BTreeMap;
use std::fmt;

/// Sink for finished-round records
pub trait StatsWriter {
    /// Append one record
    ///
    /// # Errors
    ///
    /// Returns `GameError::WriteError` if the record could not be persisted.
    fn append_record(&mut self, target: &Word, attempts: usize) -> Result<(), GameError>;
}

/// One line of the history log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsRecord {
    pub target: Word,
    pub attempts: usize,
}

impl StatsRecord {
    /// Parse a `TARGET:attempts` line
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let (target, attempts) = line.trim().split_once(':')?;
        Some(Self {
            target: Word::new(target).ok()?,
            attempts: attempts.trim().parse().ok()?,
        })
    }
}

impl fmt::Display for StatsRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.target, self.attempts)
    }
}

/// Aggregate view over a history log
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HistorySummary {
    pub games: usize,
    pub total_guesses: usize,
    pub distribution: BTreeMap<usize, usize>,
}

impl HistorySummary {
    #[must_use]
    pub fn from_records(records: &[StatsRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.games += 1;
            summary.total_guesses += record.attempts;
            *summary.distribution.entry(record.attempts).or_insert(0) += 1;
        }
        summary
    }

    #[must_use]
    pub fn average_guesses(&self) -> Option<f64> {
        (self.games > 0).then(|| self.total_guesses as f64 / self.games as f64)
    }
}

/// Keeps records in memory; used when persistence is disabled
#[derive(Debug, Default)]
pub struct MemoryStatsLog {
    pub records: Vec<StatsRecord>,
}

impl StatsWriter for MemoryStatsLog {
    fn append_record(&mut self, target: &Word, attempts: usize) -> Result<(), GameError> {
        self.records.push(StatsRecord {
            target: target.clone(),
            attempts,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_line() {
        let record = StatsRecord::parse("CRANE:4").unwrap();
        assert_eq!(record.target.text(), "CRANE");
        assert_eq!(record.attempts, 4);
        assert_eq!(record.to_string(), "CRANE:4");
    }

    #[test]
    fn parse_rejects_malformed_lines() {
        assert_eq!(StatsRecord::parse("CRANE"), None);
        assert_eq!(StatsRecord::parse("CRANE:four"), None);
        assert_eq!(StatsRecord::parse("CR4NE:4"), None);
        assert_eq!(StatsRecord::parse(""), None);
    }

    #[test]
    fn summary_aggregates() {
        let records: Vec<StatsRecord> = ["CRANE:3", "SLATE:5", "IRATE:3"]
            .iter()
            .filter_map(|l| StatsRecord::parse(l))
            .collect();
        let summary = HistorySummary::from_records(&records);

        assert_eq!(summary.games, 3);
        assert_eq!(summary.total_guesses, 11);
        assert_eq!(summary.distribution.get(&3), Some(&2));
        assert_eq!(summary.distribution.get(&5), Some(&1));
    }

    #[test]
    fn empty_summary_has_no_average() {
        assert_eq!(HistorySummary::default().average_guesses(), None);
    }

    #[test]
    fn memory_log_collects() {
        let mut log = MemoryStatsLog::default();
        log.append_record(&Word::new("crane").unwrap(), 2).unwrap();
        assert_eq!(log.records.len(), 1);
        assert_eq!(log.records[0].attempts, 2);
    }
}
