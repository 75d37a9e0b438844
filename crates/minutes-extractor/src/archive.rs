//! Append-only JSONL archive and error log

use crate::error::ExtractorError;
use crate::types::{MeetingRecord, SegmentFailure};
use chrono::{SecondsFormat, Utc};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// The two output files of a run, opened once in append mode
///
/// Each line is written with a single `write_all` and flushed, so an
/// interrupted run never corrupts lines from earlier runs.
pub struct Archive {
    records_path: PathBuf,
    records: File,
    errors_path: PathBuf,
    errors: File,
}

impl Archive {
    /// Open (creating if needed) the archive and error log for appending
    pub fn open(records_path: impl AsRef<Path>, errors_path: impl AsRef<Path>) -> io::Result<Self> {
        let records_path = records_path.as_ref().to_path_buf();
        let errors_path = errors_path.as_ref().to_path_buf();

        Ok(Self {
            records: open_append(&records_path)?,
            records_path,
            errors: open_append(&errors_path)?,
            errors_path,
        })
    }

    /// Append one record as a compact JSON line
    pub fn append_record(&mut self, record: &MeetingRecord) -> Result<(), ExtractorError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        self.records.write_all(line.as_bytes())?;
        self.records.flush()?;
        debug!("Appended record dated {} to {}", record.date, self.records_path.display());
        Ok(())
    }

    /// Append one diagnostic line for a rejected segment
    pub fn log_failure(&mut self, failure: &SegmentFailure) -> Result<(), ExtractorError> {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        let mut line = failure.to_log_line(&timestamp);
        line.push('\n');
        self.errors.write_all(line.as_bytes())?;
        self.errors.flush()?;
        Ok(())
    }

    /// Path of the JSONL archive
    pub fn records_path(&self) -> &Path {
        &self.records_path
    }

    /// Path of the error log
    pub fn errors_path(&self) -> &Path {
        &self.errors_path
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
