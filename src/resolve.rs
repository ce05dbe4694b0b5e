//! Resolving a random image URL from the metadata endpoint.

use crate::prelude::*;
use serde_json::Value;
use std::thread;

/// How many times to ask the metadata endpoint, and how long to wait between asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub max_delay: Duration,
}

impl RetryPolicy {
    /// Delay before `attempt` (1-based). The first attempt never waits.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        if attempt <= 1 {
            return Duration::ZERO;
        }
        let doublings = (attempt - 2).min(31);
        self.initial_delay
            .saturating_mul(1u32 << doublings)
            .min(self.max_delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Config::default().retry_policy()
    }
}

/// Read the string `url` field from a JSON object.
pub fn extract_url(body: &[u8]) -> Result<String, AppError> {
    if body.is_empty() {
        return Err(AppError::EmptyResponse("metadata body".to_string()));
    }
    let root: Value = serde_json::from_slice(body)?;
    root.get("url")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or(AppError::MissingUrlField)
}

/// Ask `endpoint` for metadata until it yields a `url`, at most `policy.max_attempts` times.
pub fn resolve_image_url<C: HttpGet + ?Sized>(
    client: &C,
    endpoint: &str,
    policy: &RetryPolicy,
) -> Result<String, AppError> {
    let mut last = AppError::MissingUrlField;
    for attempt in 1..=policy.max_attempts {
        let delay = policy.delay_for(attempt);
        if !delay.is_zero() {
            debug!("Waiting {:?} before attempt {}", delay, attempt);
            thread::sleep(delay);
        }

        match client.get(endpoint).and_then(|buf| extract_url(buf.as_bytes())) {
            Ok(url) => {
                debug!("Resolved image URL on attempt {}", attempt);
                return Ok(url);
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{} at {} failed: {}",
                    attempt, policy.max_attempts, endpoint, e
                );
                last = e;
            }
        }
    }
    Err(AppError::RetriesExhausted {
        attempts: policy.max_attempts,
        last: Box::new(last),
    })
}
