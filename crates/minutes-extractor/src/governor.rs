//! Fixed pause between extraction calls

use crate::config::PipelineConfig;
use std::time::Duration;
use tracing::debug;

/// Static sleep after every extraction call to stay under a request quota
#[derive(Debug, Clone, Copy)]
pub struct RateGovernor {
    call_delay: Duration,
    error_delay: Duration,
}

impl RateGovernor {
    /// Create a governor with explicit pauses
    pub fn new(call_delay: Duration, error_delay: Duration) -> Self {
        Self {
            call_delay,
            error_delay,
        }
    }

    /// Build a governor from pipeline configuration
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.call_delay(), config.error_delay())
    }

    /// The pause that follows a call with the given outcome
    pub fn delay_for(&self, succeeded: bool) -> Duration {
        if succeeded {
            self.call_delay
        } else {
            self.error_delay
        }
    }

    /// Sleep for the pause that follows a call with the given outcome
    pub async fn pause(&self, succeeded: bool) {
        let delay = self.delay_for(succeeded);
        if delay.is_zero() {
            return;
        }
        debug!("Pausing {:?} before next call", delay);
        tokio::time::sleep(delay).await;
    }
}

impl Default for RateGovernor {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delays() {
        let governor = RateGovernor::default();
        assert_eq!(governor.delay_for(true), Duration::from_secs(6));
        assert_eq!(governor.delay_for(false), Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pause_sleeps_for_configured_delay() {
        let governor = RateGovernor::new(Duration::from_secs(6), Duration::from_secs(10));

        let start = tokio::time::Instant::now();
        governor.pause(true).await;
        assert!(start.elapsed() >= Duration::from_secs(6));

        let start = tokio::time::Instant::now();
        governor.pause(false).await;
        assert!(start.elapsed() >= Duration::from_secs(10));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_delay_returns_immediately() {
        let governor = RateGovernor::new(Duration::ZERO, Duration::ZERO);
        let start = tokio::time::Instant::now();
        governor.pause(false).await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}
