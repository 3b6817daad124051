//! Optional retry and backoff around discovery attempts.
//!
//! The bare loader makes exactly one attempt. Attaching a [`RetryPolicy`]
//! classifies each failure (timeouts, throttling, connection failures) and
//! backs off exponentially before trying again. Decode failures and 4xx
//! responses are never retried.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
