//! Configuration for the minutes pipeline

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Separator lines recognised when no others are configured
pub const DEFAULT_SEPARATORS: [&str; 2] = ["***", "---"];

/// Configuration for the pipeline
///
/// Every key is optional in TOML; missing keys take the default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Pause after each successful extraction call (milliseconds)
    pub call_delay_ms: u64,

    /// Pause after a rejected segment (milliseconds)
    pub error_delay_ms: u64,

    /// Maximum time for a single extraction call (seconds)
    pub extraction_timeout_secs: u64,

    /// Maximum segment length sent to the model (characters)
    pub max_segment_chars: usize,

    /// Lines whose trimmed content equals one of these split meetings
    pub separators: Vec<String>,

    /// Trimmed segments shorter than this are discarded (characters)
    pub min_segment_chars: usize,

    /// Let single-character separators such as `***` match longer runs
    pub separator_runs: bool,
}

impl PipelineConfig {
    /// Get the post-call pause as a Duration
    pub fn call_delay(&self) -> Duration {
        Duration::from_millis(self.call_delay_ms)
    }

    /// Get the post-failure pause as a Duration
    pub fn error_delay(&self) -> Duration {
        Duration::from_millis(self.error_delay_ms)
    }

    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if self.max_segment_chars == 0 {
            return Err("max_segment_chars must be greater than 0".to_string());
        }
        if self.min_segment_chars > self.max_segment_chars {
            return Err("min_segment_chars cannot exceed max_segment_chars".to_string());
        }
        if self.separators.is_empty() {
            return Err("at least one separator is required".to_string());
        }
        if self.separators.iter().any(|s| s.trim().is_empty()) {
            return Err("separators must not be blank".to_string());
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    /// Defaults sized for the Gemini free tier (about 10 requests per minute)
    fn default() -> Self {
        Self {
            call_delay_ms: 6_000,
            error_delay_ms: 10_000,
            extraction_timeout_secs: 120,
            max_segment_chars: 50_000,
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            min_segment_chars: 0,
            separator_runs: false,
        }
    }
}

impl PipelineConfig {
    /// Aggressive preset: short pauses and timeouts for paid quota tiers
    pub fn aggressive() -> Self {
        Self {
            call_delay_ms: 1_000,
            error_delay_ms: 2_000,
            extraction_timeout_secs: 60,
            ..Self::default()
        }
    }

    /// Lenient preset: long pauses and timeouts for constrained quotas
    pub fn lenient() -> Self {
        Self {
            call_delay_ms: 12_000,
            error_delay_ms: 20_000,
            extraction_timeout_secs: 300,
            ..Self::default()
        }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
