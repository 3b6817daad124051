//! Retry loop: run an attempt until success or the policy says stop.

use super::classify::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::discovery::DiscoveryError;

/// Runs `f` until it succeeds or `policy` declines another attempt.
/// Sleeps the current thread for the backoff between attempts.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut f: F) -> Result<T, DiscoveryError>
where
    F: FnMut() -> Result<T, DiscoveryError>,
{
    let mut attempt = 1u32;
    loop {
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(attempt, classify(&e)) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::debug!("attempt {} failed ({}); retrying in {:?}", attempt, e, d);
                    std::thread::sleep(d);
                    attempt += 1;
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(2),
        }
    }

    #[test]
    fn succeeds_after_transient_failures() {
        let mut calls = 0;
        let out = run_with_retry(&fast_policy(5), || {
            calls += 1;
            if calls < 3 {
                Err(DiscoveryError::Http(503))
            } else {
                Ok(calls)
            }
        })
        .unwrap();
        assert_eq!(out, 3);
    }

    #[test]
    fn gives_up_at_max_attempts() {
        let mut calls = 0;
        let err = run_with_retry(&fast_policy(3), || -> Result<(), _> {
            calls += 1;
            Err(DiscoveryError::Http(500))
        })
        .unwrap_err();
        assert!(matches!(err, DiscoveryError::Http(500)));
        assert_eq!(calls, 3);
    }

    #[test]
    fn non_retryable_stops_immediately() {
        let mut calls = 0;
        let err = run_with_retry(&fast_policy(5), || -> Result<(), _> {
            calls += 1;
            Err(DiscoveryError::Http(404))
        })
        .unwrap_err();
        assert!(matches!(err, DiscoveryError::Http(404)));
        assert_eq!(calls, 1);
    }
}
