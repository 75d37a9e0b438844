//! Minutes LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `minutes-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use minutes_llm::MockProvider;
//! use minutes_domain::traits::LlmProvider;
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider.generate("test prompt").unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod gemini;

use minutes_domain::traits::LlmProvider as LlmProviderTrait;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Credential rejected by the API
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockResponse {
    Text(String),
    Slow(Duration, String),
    Error(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls. Specific
/// responses are keyed by a fragment of the prompt: the first registered
/// fragment contained in the prompt wins, otherwise the default response is
/// returned.
///
/// # Examples
///
/// ```
/// use minutes_llm::MockProvider;
/// use minutes_domain::traits::LlmProvider;
///
/// // Simple fixed response
/// let provider = MockProvider::new("Fixed response");
/// assert_eq!(provider.generate("any prompt").unwrap(), "Fixed response");
///
/// // Responses keyed by prompt fragment
/// let mut provider = MockProvider::default();
/// provider.add_response("Meeting A", "response A");
/// provider.add_response("Meeting B", "response B");
/// assert_eq!(provider.generate("...Meeting A text...").unwrap(), "response A");
/// assert_eq!(provider.generate("...Meeting B text...").unwrap(), "response B");
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, MockResponse)>>>,
    call_count: Arc<Mutex<usize>>,
    last_schema: Arc<Mutex<Option<String>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
            last_schema: Arc::new(Mutex::new(None)),
        }
    }

    /// Return `response` for any prompt containing `fragment`
    pub fn add_response(&mut self, fragment: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((fragment.into(), MockResponse::Text(response.into())));
    }

    /// Return `response` for any prompt containing `fragment`, blocking the
    /// calling thread for `delay` first
    pub fn add_slow_response(
        &mut self,
        fragment: impl Into<String>,
        response: impl Into<String>,
        delay: Duration,
    ) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((fragment.into(), MockResponse::Slow(delay, response.into())));
    }

    /// Fail any prompt containing `fragment` with a communication error
    pub fn add_error(&mut self, fragment: impl Into<String>, message: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((fragment.into(), MockResponse::Error(message.into())));
    }

    /// Get the number of times the provider was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) = 0;
    }

    /// Schema passed to the most recent structured call
    pub fn last_schema(&self) -> Option<String> {
        self.last_schema
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap_or_else(PoisonError::into_inner) += 1;

        let matched = self
            .responses
            .lock()
            .map_err(|_| LlmError::Other("mock state poisoned".to_string()))?
            .iter()
            .find(|(fragment, _)| prompt.contains(fragment.as_str()))
            .map(|(_, response)| response.clone());

        match matched {
            Some(MockResponse::Text(response)) => Ok(response),
            Some(MockResponse::Slow(delay, response)) => {
                std::thread::sleep(delay);
                Ok(response)
            }
            Some(MockResponse::Error(message)) => Err(LlmError::Communication(message)),
            None => Ok(self.default_response.clone()),
        }
    }

    fn generate_structured(&self, prompt: &str, schema: &str) -> Result<String, Self::Error> {
        *self.last_schema.lock().unwrap_or_else(PoisonError::into_inner) = Some(schema.to_string());
        self.generate(prompt)
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
