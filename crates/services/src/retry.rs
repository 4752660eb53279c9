//! Bounded retry for busy store operations.

use std::future::Future;
use std::time::Duration;

use store::StoreResult;

const MAX_ATTEMPTS: u32 = 3;
const BACKOFF_STEP: Duration = Duration::from_millis(50);

/// Runs a store operation, retrying on `StoreError::Busy` with linear
/// backoff. Any other error propagates immediately.
pub(crate) async fn with_busy_retry<T, F, Fut>(mut op: F) -> StoreResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = StoreResult<T>>,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Err(e) if e.is_busy() && attempt < MAX_ATTEMPTS => {
                tracing::warn!(attempt, "store busy, retrying");
                tokio::time::sleep(BACKOFF_STEP * attempt).await;
                attempt += 1;
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use store::StoreError;

    use super::*;

    #[tokio::test]
    async fn test_retries_busy_then_succeeds() {
        let calls = AtomicU32::new(0);

        let result = with_busy_retry(|| {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 2 {
                    Err(StoreError::Busy)
                } else {
                    Ok(42)
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_gives_up_after_bounded_attempts() {
        let calls = AtomicU32::new(0);

        let result: StoreResult<()> = with_busy_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(StoreError::Busy) }
        })
        .await;

        assert!(result.unwrap_err().is_busy());
        assert_eq!(calls.load(Ordering::SeqCst), MAX_ATTEMPTS);
    }

    #[tokio::test]
    async fn test_other_errors_propagate_immediately() {
        let calls = AtomicU32::new(0);

        let result: StoreResult<()> = with_busy_retry(|| {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err(StoreError::not_found("task", "1")) }
        })
        .await;

        assert!(matches!(
            result.unwrap_err(),
            StoreError::NotFound { .. }
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
