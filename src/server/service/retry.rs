//! Retry logic with configurable backoff for service operations.
//!
//! This module provides [`RetryPolicy`], a value object describing how many attempts an operation
//! gets and how long to wait between them, and [`RetryPolicy::execute_with_retry`], the single
//! helper every retried call site goes through. Errors are evaluated with
//! [`Error::to_retry_strategy`] to decide whether another attempt is worthwhile.

use std::{future::Future, time::Duration};

use crate::server::error::{retry::ErrorRetryStrategy, Error};

/// How the delay grows between attempts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Backoff {
    /// Always wait `base_delay`
    Fixed,
    /// Wait `base_delay * attempt`
    Linear,
    /// Wait `base_delay * 2^(attempt - 1)`
    Exponential,
}

impl Backoff {
    /// Delay to wait after the given failed attempt (1-based)
    pub fn delay(&self, base_delay: Duration, attempt: u32) -> Duration {
        let attempt = attempt.max(1);

        match self {
            Self::Fixed => base_delay,
            Self::Linear => base_delay.saturating_mul(attempt),
            Self::Exponential => base_delay.saturating_mul(2_u32.saturating_pow(attempt - 1)),
        }
    }
}

/// Retry configuration for an operation.
///
/// # Defaults
///
/// - **Max attempts**: 3
/// - **Base delay**: 1 second
/// - **Backoff**: Exponential (1s, 2s, 4s, ...)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts before giving up, including the first one
    pub max_attempts: u32,
    /// Delay after the first failed attempt
    pub base_delay: Duration,
    /// How the delay grows with each further attempt
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            base_delay: Duration::from_secs(Self::DEFAULT_BASE_DELAY_SECS),
            backoff: Backoff::Exponential,
        }
    }
}

impl RetryPolicy {
    const DEFAULT_MAX_ATTEMPTS: u32 = 3;
    const DEFAULT_BASE_DELAY_SECS: u64 = 1;

    /// A policy that makes exactly one attempt
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Executes an operation, retrying transient failures according to this policy.
    ///
    /// Runs `operation` up to `max_attempts` times. Errors are evaluated using
    /// `to_retry_strategy()`: [`ErrorRetryStrategy::Fail`] returns immediately, while
    /// [`ErrorRetryStrategy::Retry`] waits for the backoff delay and tries again until the
    /// attempts are exhausted.
    ///
    /// # Arguments
    /// - `description` - Human-readable description for logging (e.g., "snapshot write for 123")
    /// - `operation` - Closure producing a fresh future for each attempt
    ///
    /// # Returns
    /// - `Ok(R)` - Operation succeeded
    /// - `Err(Error)` - Operation failed permanently or exhausted all attempts
    pub async fn execute_with_retry<R, F, Fut>(
        &self,
        description: &str,
        mut operation: F,
    ) -> Result<R, Error>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, Error>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt_count = 0;

        loop {
            tracing::debug!(
                "Processing {} (attempt {}/{})",
                description,
                attempt_count + 1,
                max_attempts
            );

            match operation().await {
                Ok(result) => {
                    tracing::debug!("Successfully processed {}", description);
                    return Ok(result);
                }
                Err(e) => match e.to_retry_strategy() {
                    ErrorRetryStrategy::Fail => {
                        tracing::error!("Permanent error for {}: {:?}", description, e);
                        return Err(e);
                    }
                    ErrorRetryStrategy::Retry => {
                        attempt_count += 1;
                        if attempt_count >= max_attempts {
                            tracing::error!(
                                "Max attempts ({}) exceeded for {}: {:?}",
                                max_attempts,
                                description,
                                e
                            );
                            return Err(e);
                        }

                        let backoff = self.backoff.delay(self.base_delay, attempt_count);

                        tracing::warn!(
                            "Retrying {} (attempt {}/{}) after {:?}: {:?}",
                            description,
                            attempt_count,
                            max_attempts,
                            backoff,
                            e
                        );

                        tokio::time::sleep(backoff).await;
                    }
                },
            }
        }
    }
}
