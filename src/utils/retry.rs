// Bounded retry for transient upstream failures

use backoff::{backoff::Backoff, ExponentialBackoff};
use std::time::Duration;
use tracing::debug;

/// Create exponential backoff configuration for retries
pub fn create_backoff() -> ExponentialBackoff {
    ExponentialBackoff {
        current_interval: Duration::from_millis(500),
        initial_interval: Duration::from_millis(500),
        randomization_factor: 0.3, // Add jitter
        multiplier: 2.0,
        max_interval: Duration::from_secs(5),
        max_elapsed_time: Some(Duration::from_secs(30)),
        ..Default::default()
    }
}

/// Determine if an HTTP status code is retryable
pub fn is_retryable(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Execute an operation with a bounded number of retries.
///
/// Only transient failures (429/5xx and transport errors, which the caller
/// encodes as 5xx) are retried; client errors return immediately.
/// `max_retries` counts additional attempts after the first.
pub async fn with_retry<F, Fut, T>(
    operation_name: &str,
    max_retries: u32,
    mut operation: F,
) -> Result<T, (u16, String)>
where
    F: FnMut() -> Fut,
    Fut: std::future::Future<Output = Result<T, (u16, String)>>,
{
    let mut backoff = create_backoff();
    let max_attempts = max_retries.saturating_add(1);
    let mut attempt = 0;

    loop {
        attempt += 1;

        match operation().await {
            Ok(result) => {
                if attempt > 1 {
                    debug!("{} succeeded on attempt {}", operation_name, attempt);
                }
                return Ok(result);
            }
            Err((status, error_body)) => {
                if !is_retryable(status) || attempt >= max_attempts {
                    // Non-retryable error or max attempts reached
                    return Err((status, error_body));
                }

                let delay = backoff.next_backoff().unwrap_or(Duration::from_secs(5));
                debug!(
                    "{} failed with {} (attempt {}), retrying after {}ms",
                    operation_name,
                    status,
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }
        }
    }
}
