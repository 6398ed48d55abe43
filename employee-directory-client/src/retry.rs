//! Bounded retry for rate-limited requests.
//!
//! # Retry strategy
//! - Only `ClientError::RateLimited` (HTTP 429) is retried
//! - The wait honours the server's `retry-after` hint, falling back to
//!   `default_delay` (5s) when the header is absent or unparseable
//! - Every wait is capped at `max_delay`
//! - After `max_attempts` rate-limited attempts the loop gives up with
//!   `ClientError::RetryExhausted`
//! - Both the attempt and the wait stop early when the cancel token fires

use std::future::Future;
use std::time::Duration;

use crate::cancel::CancelToken;
use crate::error::{ClientError, Result};

/// Delay used when a 429 response carries no usable `retry-after` header.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);
/// Upper bound for a single wait.
pub const DEFAULT_MAX_RETRY_DELAY: Duration = Duration::from_secs(30);
/// Attempts per logical request, the first one included.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Retry configuration for rate-limited requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts per logical request (0 is treated as 1).
    pub max_attempts: u32,
    /// Wait used when the service sends no `retry-after` hint.
    pub default_delay: Duration,
    /// Cap applied to every wait.
    pub max_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            default_delay: DEFAULT_RETRY_DELAY,
            max_delay: DEFAULT_MAX_RETRY_DELAY,
        }
    }
}

impl RetryPolicy {
    /// Wait before the next attempt, given the `retry-after` hint of the last 429.
    pub fn delay_for(&self, retry_after: Option<u64>) -> Duration {
        retry_after
            .map_or(self.default_delay, Duration::from_secs)
            .min(self.max_delay)
    }

    fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }

    /// Run `attempt` until it stops being rate limited.
    ///
    /// `label` names the request in logs.
    pub async fn run<T, F, Fut>(&self, cancel: &CancelToken, label: &str, mut attempt: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.attempts();
        let mut last_retry_after = None;

        for n in 1..=max_attempts {
            match cancel.run(attempt()).await {
                Err(e) if e.is_retryable() => {
                    let retry_after = e.retry_after();
                    last_retry_after = retry_after;
                    if n == max_attempts {
                        break;
                    }
                    let delay = self.delay_for(retry_after);
                    log::warn!(
                        "[{label}] Too many requests (attempt {n}/{max_attempts}), retrying in {:.1}s",
                        delay.as_secs_f32()
                    );
                    cancel
                        .run(async {
                            tokio::time::sleep(delay).await;
                            Ok(())
                        })
                        .await?;
                }
                other => return other,
            }
        }

        log::error!("[{label}] Still rate limited after {max_attempts} attempts, giving up");
        Err(ClientError::RetryExhausted {
            attempts: max_attempts,
            retry_after: last_retry_after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::Instant;

    fn rate_limited(retry_after: Option<u64>) -> ClientError {
        ClientError::RateLimited { retry_after }
    }

    // ---- delay_for ----

    #[test]
    fn delay_uses_hint() {
        assert_eq!(RetryPolicy::default().delay_for(Some(2)), Duration::from_secs(2));
    }

    #[test]
    fn delay_defaults_to_five_seconds() {
        assert_eq!(RetryPolicy::default().delay_for(None), Duration::from_secs(5));
    }

    #[test]
    fn delay_capped() {
        assert_eq!(
            RetryPolicy::default().delay_for(Some(3600)),
            DEFAULT_MAX_RETRY_DELAY
        );
    }

    #[test]
    fn default_delay_also_capped() {
        let policy = RetryPolicy {
            max_delay: Duration::from_secs(1),
            ..RetryPolicy::default()
        };
        assert_eq!(policy.delay_for(None), Duration::from_secs(1));
    }

    // ---- run ----

    #[tokio::test(start_paused = true)]
    async fn rate_limit_then_success_is_transparent() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let started = Instant::now();

        let result = RetryPolicy::default()
            .run(&CancelToken::new(), "test", || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        Err(rate_limited(Some(2)))
                    } else {
                        Ok("employees")
                    }
                }
            })
            .await;

        assert_eq!(result, Ok("employees"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(started.elapsed() >= Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let policy = RetryPolicy {
            max_attempts: 3,
            ..RetryPolicy::default()
        };

        let result: Result<()> = policy
            .run(&CancelToken::new(), "test", || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Err(rate_limited(Some(1))) }
            })
            .await;

        assert_eq!(
            result,
            Err(ClientError::RetryExhausted {
                attempts: 3,
                retry_after: Some(1)
            })
        );
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn not_found_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<()> = RetryPolicy::default()
            .run(&CancelToken::new(), "test", || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Err(ClientError::NotFound { id: "999".into() }) }
            })
            .await;

        assert_eq!(result, Err(ClientError::NotFound { id: "999".into() }));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn network_error_is_not_retried() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        let result: Result<()> = RetryPolicy::default()
            .run(&CancelToken::new(), "test", || {
                counter.fetch_add(1, Ordering::SeqCst);
                async {
                    Err(ClientError::Network {
                        detail: "connection refused".into(),
                    })
                }
            })
            .await;

        assert!(matches!(result, Err(ClientError::Network { .. })));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_attempts_means_one() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let policy = RetryPolicy {
            max_attempts: 0,
            ..RetryPolicy::default()
        };

        let result: Result<()> = policy
            .run(&CancelToken::new(), "test", || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Err(rate_limited(None)) }
            })
            .await;

        assert!(matches!(
            result,
            Err(ClientError::RetryExhausted { attempts: 1, .. })
        ));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_during_delay_stops_retrying() {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let cancel = CancelToken::new();
        let canceller = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_secs(1)).await;
            canceller.cancel();
        });

        let result: Result<()> = RetryPolicy::default()
            .run(&cancel, "test", || {
                counter.fetch_add(1, Ordering::SeqCst);
                async { Err(rate_limited(Some(10))) }
            })
            .await;

        assert_eq!(result, Err(ClientError::Cancelled));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
