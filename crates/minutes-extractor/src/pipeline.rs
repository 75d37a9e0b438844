//! Pipeline driver: split → extract → validate → archive, one segment at a time

use crate::archive::Archive;
use crate::config::PipelineConfig;
use crate::error::ExtractorError;
use crate::extractor::Extractor;
use crate::governor::RateGovernor;
use crate::splitter::Splitter;
use crate::types::{RunSummary, SegmentFailure};
use minutes_domain::traits::LlmProvider;
use std::time::Instant;
use tracing::{info, warn};

/// Excerpt length written to the error log
const EXCERPT_CHARS: usize = 80;

/// Runs a whole minutes file through the extractor
pub struct Pipeline<L>
where
    L: LlmProvider,
{
    splitter: Splitter,
    extractor: Extractor<L>,
    governor: RateGovernor,
}

impl<L> Pipeline<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a pipeline, rejecting invalid configuration
    pub fn new(llm_provider: L, config: PipelineConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;

        Ok(Self {
            splitter: Splitter::from_config(&config),
            governor: RateGovernor::from_config(&config),
            extractor: Extractor::new(llm_provider, config),
        })
    }

    /// Process every segment of `text`, appending results to `archive`
    ///
    /// Extraction and validation failures are logged and skipped. Only
    /// archive write failures abort the run.
    pub async fn run(&self, text: &str, archive: &mut Archive) -> Result<RunSummary, ExtractorError> {
        let start = Instant::now();
        let segments = self.splitter.split(text);
        let total = segments.len();

        info!(
            "Found {} meeting entries. Starting conversion with model '{}'...",
            total,
            self.extractor.model_name()
        );

        let mut summary = RunSummary {
            segments: total,
            ..RunSummary::default()
        };

        for segment in &segments {
            info!("[{}/{}] Processing...", segment.index, total);

            let succeeded = match self.extractor.extract(segment).await {
                Ok(record) => {
                    archive.append_record(&record)?;
                    summary.archived += 1;
                    info!("      Success: saved meeting from {}", record.date);
                    true
                }
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => {
                    warn!("      Error on entry {}: {}", segment.index, e);
                    archive.log_failure(&SegmentFailure {
                        index: segment.index,
                        total,
                        reason: e.to_string(),
                        excerpt: segment.excerpt(EXCERPT_CHARS),
                    })?;
                    summary.rejected += 1;
                    false
                }
            };

            self.governor.pause(succeeded).await;
        }

        summary.processing_time_ms = start.elapsed().as_millis() as u64;

        info!(
            "Processing complete: {} archived to {}, {} rejected (see {})",
            summary.archived,
            archive.records_path().display(),
            summary.rejected,
            archive.errors_path().display()
        );

        Ok(summary)
    }
}
