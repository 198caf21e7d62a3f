pub mod health;
pub mod ingest;
pub mod query;
pub mod readiness;

pub use health::{HealthReport, HealthReporter, ProbeStatus};
pub use ingest::{IngestPipeline, IngestResult};
pub use query::QueryService;
pub use readiness::{await_cache_ready, retry_fixed, RetryOutcome, RetryPolicy};

use std::future::Future;
use std::time::Duration;

use crate::error::{QuotesinkError, Result};

/// Run a store operation under a fixed time bound.
///
/// A slow store call must only delay its own request, never wedge it; the
/// caller supplies the error so the timeout lands in the same category the
/// wrapped operation would fail with.
pub(crate) async fn bounded<T, F>(
    limit: Duration,
    operation: F,
    on_timeout: impl FnOnce() -> QuotesinkError,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => Err(on_timeout()),
    }
}
