use async_trait::async_trait;

use crate::domain::Quote;
use crate::error::Result;

/// Narrow key-value capability of the cache store.
///
/// The serving paths only ever need these three operations; everything else
/// the engine offers is deliberately out of reach.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Liveness probe
    async fn ping(&self) -> Result<()>;

    /// Overwrite `key` with `value` (per-key last-writer-wins)
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

/// Narrow append-only capability of the document store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Append one quote record; duplicates are permitted and expected
    /// under retried sends
    async fn insert(&self, quote: &Quote) -> Result<()>;

    /// Liveness probe against the store's admin surface
    async fn ping_admin(&self) -> Result<()>;
}
