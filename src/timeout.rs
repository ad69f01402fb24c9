use std::future::Future;
use std::time::Duration;

use crate::AttemptTimedOut;

/// Races `operation` against a timer of length `limit`.
///
/// Whichever settles first decides the outcome. When the timer wins the
/// operation future is dropped, which is as far as cancellation goes: a
/// request already on the wire may still complete, but its result is never
/// observed. When the operation wins the timer is dropped with it.
pub async fn with_timeout<F, T, E>(limit: Duration, operation: F) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    E: From<AttemptTimedOut>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => Err(AttemptTimedOut { after: limit }.into()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    };
    use std::time::Duration;

    use super::with_timeout;
    use crate::{AttemptTimedOut, FailureKind, LookupError};

    #[tokio::test(start_paused = true)]
    async fn hang_becomes_timeout() {
        let err = with_timeout(
            Duration::from_millis(2_000),
            std::future::pending::<Result<(), LookupError>>(),
        )
        .await
        .expect_err("pending operation must time out");

        assert_eq!(err.kind(), FailureKind::Timeout);
    }

    #[tokio::test(start_paused = true)]
    async fn fast_operation_wins_the_race() {
        let value = with_timeout(Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<_, AttemptTimedOut>(7)
        })
        .await
        .expect("operation settles before the timer");

        assert_eq!(value, 7);
    }

    #[tokio::test(start_paused = true)]
    async fn operation_error_passes_through() {
        let err = with_timeout(Duration::from_millis(50), async {
            Err::<(), _>(LookupError::ClientError {
                status: 400,
                body: "bad".to_owned(),
            })
        })
        .await
        .expect_err("operation error must be returned");

        assert_eq!(err.kind(), FailureKind::ClientError(400));
    }

    #[tokio::test(start_paused = true)]
    async fn late_result_is_never_observed() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);

        let result = with_timeout(Duration::from_millis(20), async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            flag.store(true, Ordering::SeqCst);
            Ok::<_, AttemptTimedOut>(())
        })
        .await;

        assert_eq!(
            result,
            Err(AttemptTimedOut {
                after: Duration::from_millis(20)
            })
        );

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!finished.load(Ordering::SeqCst));
    }
}
