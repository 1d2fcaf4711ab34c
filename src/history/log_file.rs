//! File-backed history log

use super::{StatsRecord, StatsWriter};
use crate::core::Word;
use crate::error::GameError;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Log file used when none is configured
pub const DEFAULT_STATS_FILE: &str = "wordle_statistics.csv";

/// Appends records to a file, creating it on first use
#[derive(Debug, Clone)]
pub struct FileStatsLog {
    path: PathBuf,
}

impl FileStatsLog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{line}")
    }
}

impl StatsWriter for FileStatsLog {
    fn append_record(&mut self, target: &Word, attempts: usize) -> Result<(), GameError> {
        let record = StatsRecord {
            target: target.clone(),
            attempts,
        };
        self.write_line(&record.to_string())
            .map_err(|source| GameError::WriteError {
                path: self.path.clone(),
                source,
            })
    }
}

/// Read every well-formed record from a log file
///
/// Malformed lines are skipped with a warning. A missing file reads as an
/// empty history.
///
/// # Errors
///
/// Returns an I/O error if the file exists but cannot be read.
pub fn read_records<P: AsRef<Path>>(path: P) -> io::Result<Vec<StatsRecord>> {
    let path = path.as_ref();
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    let mut records = Vec::new();
    for (number, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match StatsRecord::parse(line) {
            Some(record) => records.push(record),
            None => log::warn!("{}:{}: skipping malformed record", path.display(), number + 1),
        }
    }
    Ok(records)
}
