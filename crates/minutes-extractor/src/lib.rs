//! Minutes Extractor
//!
//! Turns a flat file of meeting minutes into a line-delimited JSON archive.
//!
//! # Architecture
//!
//! ```text
//! minutes.txt → Splitter → Extractor → LLM → Validator → Archive
//!                              ↑                            ↓
//!                        RateGovernor                  errors.log
//! ```
//!
//! Segments are processed one at a time. A segment whose extraction or
//! validation fails is logged and skipped; only I/O failures on the archive
//! abort the run.
//!
//! # Example Usage
//!
//! ```no_run
//! use minutes_extractor::{Archive, Pipeline, PipelineConfig};
//! use minutes_llm::MockProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let llm = MockProvider::new(r#"{"date": "2004-01-21", "location": "Clubhouse"}"#);
//! let pipeline = Pipeline::new(llm, PipelineConfig::default())?;
//! let mut archive = Archive::open("formatted_minutes.jsonl", "errors.log")?;
//!
//! let summary = pipeline.run("Meeting A text\n***\nMeeting B text", &mut archive).await?;
//!
//! println!("Archived: {}", summary.archived);
//! println!("Rejected: {}", summary.rejected);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod archive;
mod config;
mod dates;
mod error;
mod extractor;
mod governor;
mod parser;
mod pipeline;
mod prompt;
mod schema;
mod splitter;
mod types;
mod validator;

#[cfg(test)]
mod tests;

pub use archive::Archive;
pub use config::{PipelineConfig, DEFAULT_SEPARATORS};
pub use dates::normalize_date;
pub use error::{ExtractorError, RejectionReason};
pub use extractor::Extractor;
pub use governor::RateGovernor;
pub use parser::parse_llm_response;
pub use pipeline::Pipeline;
pub use prompt::PromptBuilder;
pub use schema::response_schema;
pub use splitter::Splitter;
pub use types::{MeetingRecord, Motion, RunSummary, SegmentFailure};
pub use validator::validate;
