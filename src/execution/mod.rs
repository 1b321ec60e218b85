//! Seam to the request-execution collaborator.
//!
//! This crate does not perform network I/O. Callers plug their transport in
//! through [`RequestExecutor`] and get retries, request counting, and latency
//! bookkeeping from [`execute_tracked`].

use async_trait::async_trait;
use tokio::time::Instant;

use crate::response::ResponseRecord;
use crate::retry::RetryPolicy;
use crate::session::SessionContext;
use crate::shutdown::ShutdownReceiver;
use crate::support::measure_response_time;

#[async_trait]
pub trait RequestExecutor: Send + Sync {
    type Error: Send;

    /// Performs one request. Any error is treated as retryable.
    async fn execute(&self) -> Result<ResponseRecord, Self::Error>;
}

/// Executes one logical request under `policy`.
///
/// Every attempt bumps the session's request counter. The final response is
/// recorded in the session; when the executor did not report a latency, the
/// time spent in the successful attempt is filled in.
///
/// # Errors
///
/// Returns the executor's last error, unchanged, once attempts run out or
/// `shutdown` interrupts a backoff pause.
pub async fn execute_tracked<X>(
    executor: &X,
    policy: &RetryPolicy,
    session: &mut SessionContext,
    shutdown: Option<&mut ShutdownReceiver>,
) -> Result<ResponseRecord, X::Error>
where
    X: RequestExecutor + ?Sized,
{
    let attempt = || {
        let request_number = session.increment_request_count();
        tracing::debug!(request_number, "Executing request");
        let started = Instant::now();
        let pending = executor.execute();
        async move {
            let mut response = pending.await?;
            if response.response_time.is_none() {
                response.response_time = Some(measure_response_time(started));
            }
            Ok::<_, X::Error>(response)
        }
    };

    let response = match shutdown {
        Some(shutdown) => policy.run_until_shutdown(attempt, shutdown).await?,
        None => policy.run(attempt).await?,
    };
    session.record_response(response.clone());
    Ok(response)
}
