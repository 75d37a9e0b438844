//! Core Extractor implementation

use crate::config::PipelineConfig;
use crate::dates::normalize_date;
use crate::error::ExtractorError;
use crate::parser::parse_llm_response;
use crate::prompt::PromptBuilder;
use crate::schema::response_schema;
use crate::types::MeetingRecord;
use crate::validator::validate;
use minutes_domain::traits::LlmProvider;
use minutes_domain::Segment;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, warn};

/// The Extractor turns one meeting segment into a validated record
pub struct Extractor<L>
where
    L: LlmProvider,
{
    llm_provider: Arc<L>,
    config: PipelineConfig,
    schema: Arc<str>,
}

impl<L> Extractor<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Extractor
    pub fn new(llm_provider: L, config: PipelineConfig) -> Self {
        Self {
            llm_provider: Arc::new(llm_provider),
            config,
            schema: Arc::from(response_schema().to_string()),
        }
    }

    /// Name of the underlying model
    pub fn model_name(&self) -> &str {
        self.llm_provider.model_name()
    }

    /// Extract, validate and normalise a record for one segment
    ///
    /// Every error returned here is recoverable: the caller logs it and moves
    /// on to the next segment.
    pub async fn extract(&self, segment: &Segment) -> Result<MeetingRecord, ExtractorError> {
        let length = segment.text.chars().count();
        if length > self.config.max_segment_chars {
            return Err(ExtractorError::SegmentTooLong(length, self.config.max_segment_chars));
        }

        let prompt = PromptBuilder::new(segment.text.as_str()).build();
        debug!("Prompt length: {} chars", prompt.len());

        let llm_response = timeout(self.config.extraction_timeout(), self.call_llm(prompt))
            .await
            .map_err(|_| ExtractorError::Timeout(self.config.extraction_timeout_secs))??;

        debug!("LLM response length: {} chars", llm_response.len());

        let payload = parse_llm_response(&llm_response)?;
        let mut record = validate(&payload)?;

        match normalize_date(&record.date) {
            Some(date) => record.date = date,
            None => warn!(
                "Segment {}: could not normalise date '{}', keeping it as-is",
                segment.index, record.date
            ),
        }
        record.original_text = segment.text.clone();

        Ok(record)
    }

    /// Call the LLM provider
    async fn call_llm(&self, prompt: String) -> Result<String, ExtractorError> {
        let llm = Arc::clone(&self.llm_provider);
        let schema = Arc::clone(&self.schema);

        // Call in a blocking context since LlmProvider is not async. A call
        // that outlives the extraction timeout keeps its blocking thread until
        // the provider returns, so providers must bound their own requests
        // (GeminiProvider is built with the same timeout as its HTTP client).
        tokio::task::spawn_blocking(move || {
            llm.generate_structured(&prompt, &schema)
                .map_err(|e| ExtractorError::Llm(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Llm(format!("Task join error: {}", e)))?
    }
}
