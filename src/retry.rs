use std::fmt::Display;
use std::future::Future;

use tokio::time::sleep;

use crate::{with_timeout, AttemptTimedOut, RetryPolicy};

/// Splits failures into retryable and terminal.
pub trait Classify {
    /// `true` when another attempt may succeed (timeouts, network errors, 5xx).
    fn is_retryable(&self) -> bool;
}

/// Runs `operation` until it succeeds, fails terminally, or the attempt
/// budget of `policy` is spent.
///
/// `operation` is invoked afresh for every attempt; nothing is resumed.
/// Each attempt is bounded by [`RetryPolicy::per_attempt_timeout`] when set.
/// Attempts run strictly one after another, and dropping the returned future
/// stops the loop together with any pending timer.
///
/// On exhaustion the failure of the last attempt is returned; earlier
/// failures are only logged.
pub async fn execute_with_retry<T, E, F, Fut>(
    policy: &RetryPolicy,
    mut operation: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Classify + From<AttemptTimedOut> + Display,
{
    let max_attempts = policy.attempts();
    let mut attempt = 1u32;
    loop {
        let result = match policy.per_attempt_timeout {
            Some(limit) => with_timeout(limit, operation()).await,
            None => operation().await,
        };

        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        if !err.is_retryable() {
            return Err(err);
        }

        if attempt >= max_attempts {
            #[cfg(feature = "tracing")]
            tracing::warn!(attempt, max_attempts, error = %err, "retry budget exhausted");
            return Err(err);
        }

        let delay = policy.delay_after(attempt);

        #[cfg(feature = "tracing")]
        tracing::warn!(
            attempt,
            next_attempt = attempt + 1,
            delay_ms = delay.as_millis() as u64,
            error = %err,
            "attempt failed, retrying after backoff"
        );

        sleep(delay).await;
        attempt += 1;
    }
}
