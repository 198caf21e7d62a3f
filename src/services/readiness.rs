//! Startup readiness gate.
//!
//! The service must not accept ingestion or query traffic until the cache
//! store answers a liveness probe; the document store is only checked on
//! demand through the health endpoint.

use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::adapters::CacheStore;
use crate::config::StartupConfig;
use crate::error::{QuotesinkError, Result};

/// Fixed-delay bounded retry budget
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl From<&StartupConfig> for RetryPolicy {
    fn from(config: &StartupConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            delay: config.retry_delay(),
        }
    }
}

/// Outcome of a bounded retry: either the operation succeeded on some
/// attempt, or the whole budget was spent.
#[derive(Debug)]
pub enum RetryOutcome<T> {
    Succeeded { value: T, attempts: u32 },
    Exhausted { attempts: u32 },
}

/// Retry `operation` up to `policy.max_attempts` times with a fixed sleep
/// between attempts. Returns immediately on the first success; the sleep is
/// only taken between attempts, never after the last failure.
pub async fn retry_fixed<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> RetryOutcome<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 1..=policy.max_attempts {
        match operation().await {
            Ok(value) => return RetryOutcome::Succeeded { value, attempts: attempt },
            Err(e) => {
                warn!(
                    attempt,
                    max_attempts = policy.max_attempts,
                    error = %e,
                    "Probe failed"
                );
                if attempt < policy.max_attempts {
                    sleep(policy.delay).await;
                }
            }
        }
    }
    RetryOutcome::Exhausted {
        attempts: policy.max_attempts,
    }
}

/// Block until the cache store answers a ping, retrying per `policy`.
///
/// Returns the attempt number that succeeded. Exhausting the budget is a
/// fatal startup condition; the caller must abort process initialization.
pub async fn await_cache_ready(cache: &dyn CacheStore, policy: &RetryPolicy) -> Result<u32> {
    info!(
        max_attempts = policy.max_attempts,
        delay_ms = policy.delay.as_millis() as u64,
        "Waiting for cache store"
    );

    match retry_fixed(policy, || cache.ping()).await {
        RetryOutcome::Succeeded { attempts, .. } => {
            info!(attempts, "Cache store is available");
            Ok(attempts)
        }
        RetryOutcome::Exhausted { attempts } => {
            Err(QuotesinkError::StartupConnectivity { attempts })
        }
    }
}
