//! Record and reporting types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A validated meeting record, one line of the archive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    /// Meeting date, `YYYY-MM-DD` when it could be normalised
    pub date: String,

    /// Where the meeting was held
    pub location: String,

    /// Members present
    #[serde(default)]
    pub attendance_members: Vec<String>,

    /// Guests, prospects and pledges present
    #[serde(default)]
    pub attendance_guests: Vec<String>,

    /// Fund name to amount (or any value the minutes record)
    #[serde(default)]
    pub treasurer_report: Map<String, Value>,

    /// Motions raised
    #[serde(default)]
    pub motions: Vec<Motion>,

    /// Notable discussions, upcoming runs and decisions
    #[serde(default)]
    pub key_events: Vec<String>,

    /// When and where the next meeting is
    #[serde(default)]
    pub next_meeting_info: Option<String>,

    /// Verbatim segment text the record was extracted from
    #[serde(default)]
    pub original_text: String,
}

/// A motion raised at a meeting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    /// What was moved
    pub description: String,

    /// Who moved it
    pub proposed_by: String,

    /// passed / failed / carried
    pub result: String,
}

/// A segment that did not make it into the archive
#[derive(Debug, Clone)]
pub struct SegmentFailure {
    /// 1-based segment index
    pub index: usize,

    /// Total segments in the run
    pub total: usize,

    /// Human-readable reason
    pub reason: String,

    /// Single-line excerpt of the segment text
    pub excerpt: String,
}

impl SegmentFailure {
    /// Render as one error-log line (no trailing newline)
    pub fn to_log_line(&self, timestamp: &str) -> String {
        let reason = self.reason.replace(['\r', '\n'], " ");
        format!(
            "{} segment {}/{} failed: {} | excerpt: \"{}\"",
            timestamp, self.index, self.total, reason, self.excerpt
        )
    }
}

/// Outcome of a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Segments found by the splitter
    pub segments: usize,

    /// Records appended to the archive
    pub archived: usize,

    /// Segments written to the error log
    pub rejected: usize,

    /// Wall-clock time for the run in milliseconds
    pub processing_time_ms: u64,
}
