//! Error types for the Extractor

use thiserror::Error;

/// Why a model response was not accepted as a meeting record
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    /// Response was not parseable JSON
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// Response parsed, but the top level is not an object
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),

    /// A required field is absent
    #[error("missing required field '{0}'")]
    MissingField(String),

    /// A field is present with the wrong JSON type
    #[error("field '{field}' has wrong type: expected {expected}, found {found}")]
    WrongType {
        /// Field path, e.g. `motions[1].result`
        field: String,
        /// Expected shape
        expected: &'static str,
        /// Actual JSON type
        found: &'static str,
    },
}

/// Errors that can occur while processing minutes
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Extraction call exceeded the configured timeout
    #[error("Extraction timeout after {0}s")]
    Timeout(u64),

    /// Segment exceeds maximum length
    #[error("Segment too long: {0} chars (max: {1})")]
    SegmentTooLong(usize, usize),

    /// Model output failed schema validation
    #[error("Rejected: {0}")]
    Rejected(#[from] RejectionReason),

    /// Reading input or writing the archive failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Record could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ExtractorError {
    /// Whether this error must abort the run rather than skip a segment
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExtractorError::Io(_) | ExtractorError::Serialization(_) | ExtractorError::Config(_)
        )
    }
}
