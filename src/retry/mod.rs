//! Bounded retries with linear backoff around a fallible async operation.
//!
//! Attempt `n` (1-based) that fails and is not the last one is followed by a
//! pause of `base_delay * n`. The final failure is handed back to the caller
//! exactly as the operation produced it.

use std::future::Future;
use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;

use crate::error::RetryConfigError;
use crate::shutdown::ShutdownReceiver;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay: DEFAULT_BASE_DELAY,
        }
    }
}

impl RetryPolicy {
    /// # Errors
    ///
    /// Returns [`RetryConfigError::MaxAttemptsZero`] when `max_attempts` is 0.
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Result<Self, RetryConfigError> {
        if max_attempts == 0 {
            return Err(RetryConfigError::MaxAttemptsZero {
                value: max_attempts,
            });
        }
        Ok(Self {
            max_attempts,
            base_delay,
        })
    }

    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    #[must_use]
    pub const fn base_delay(&self) -> Duration {
        self.base_delay
    }

    /// Pause taken after the failed attempt number `attempt` (1-based).
    #[must_use]
    pub const fn retry_delay(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }

    /// Runs `operation` until it succeeds or the attempts are exhausted.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt, unchanged.
    pub async fn run<F, Fut, T, E>(&self, operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run_inner(operation, None).await
    }

    /// Like [`run`](Self::run), but a shutdown signal received during a
    /// backoff pause stops retrying.
    ///
    /// # Errors
    ///
    /// Returns the error of the last attempt made, unchanged, whether the
    /// attempts ran out or shutdown interrupted the backoff.
    pub async fn run_until_shutdown<F, Fut, T, E>(
        &self,
        operation: F,
        shutdown: &mut ShutdownReceiver,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.run_inner(operation, Some(shutdown)).await
    }

    async fn run_inner<F, Fut, T, E>(
        &self,
        mut operation: F,
        mut shutdown: Option<&mut ShutdownReceiver>,
    ) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut attempt: u32 = 1;
        loop {
            let err = match operation().await {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };
            if attempt >= self.max_attempts {
                return Err(err);
            }

            let delay = self.retry_delay(attempt);
            tracing::debug!(
                attempt,
                max_attempts = self.max_attempts,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "Attempt failed, backing off"
            );
            if !backoff(delay, shutdown.as_deref_mut()).await {
                tracing::debug!(attempt, "Retry interrupted by shutdown");
                return Err(err);
            }
            attempt = attempt.saturating_add(1);
        }
    }
}

/// Sleeps for `delay`. Returns `false` when shutdown interrupted the pause.
async fn backoff(delay: Duration, shutdown: Option<&mut ShutdownReceiver>) -> bool {
    let Some(shutdown) = shutdown else {
        tokio::time::sleep(delay).await;
        return true;
    };

    let sleep = tokio::time::sleep(delay);
    tokio::pin!(sleep);
    tokio::select! {
        () = &mut sleep => true,
        received = shutdown.recv() => match received {
            Ok(()) | Err(RecvError::Lagged(_)) => false,
            Err(RecvError::Closed) => {
                sleep.await;
                true
            }
        },
    }
}
