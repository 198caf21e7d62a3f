use std::sync::Arc;
use std::time::Duration;

use crate::adapters::CacheStore;
use crate::domain::last_price_key;
use crate::error::{QuotesinkError, Result};
use crate::services::bounded;

/// Serves latest-price lookups from the cache only; never falls through to
/// the document store.
pub struct QueryService {
    cache: Arc<dyn CacheStore>,
    op_timeout: Duration,
}

impl QueryService {
    pub fn new(cache: Arc<dyn CacheStore>, op_timeout: Duration) -> Self {
        Self { cache, op_timeout }
    }

    /// Latest cached price for `symbol`.
    ///
    /// `NotFound` is the steady state for a symbol that was never ingested,
    /// not an exceptional condition. `CorruptCacheEntry` is defensive: only
    /// the ingestion pipeline writes this key.
    pub async fn last_price(&self, symbol: &str) -> Result<f64> {
        let key = last_price_key(symbol);
        let raw = bounded(self.op_timeout, self.cache.get(&key), || {
            QuotesinkError::CacheRead(format!("GET {key} timed out"))
        })
        .await?;

        let Some(raw) = raw else {
            return Err(QuotesinkError::NotFound {
                symbol: symbol.to_string(),
            });
        };

        raw.parse::<f64>()
            .map_err(|_| QuotesinkError::CorruptCacheEntry { key, value: raw })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::InMemoryCache;

    fn service(cache: &Arc<InMemoryCache>) -> QueryService {
        QueryService::new(
            Arc::clone(cache) as Arc<dyn CacheStore>,
            Duration::from_millis(100),
        )
    }

    #[tokio::test]
    async fn hit_parses_the_cached_price() {
        let cache = Arc::new(InMemoryCache::new());
        cache.put("last_price:AAPL", "170.25");

        assert_eq!(service(&cache).last_price("AAPL").await.unwrap(), 170.25);
    }

    #[tokio::test]
    async fn never_ingested_symbol_is_not_found() {
        let cache = Arc::new(InMemoryCache::new());

        let err = service(&cache).last_price("ZZZZ").await.unwrap_err();
        assert!(matches!(err, QuotesinkError::NotFound { symbol } if symbol == "ZZZZ"));
    }

    #[tokio::test]
    async fn unparseable_entry_is_reported_as_corrupt() {
        let cache = Arc::new(InMemoryCache::new());
        cache.put("last_price:AAPL", "not-a-number");

        let err = service(&cache).last_price("AAPL").await.unwrap_err();
        assert!(matches!(
            err,
            QuotesinkError::CorruptCacheEntry { key, value }
                if key == "last_price:AAPL" && value == "not-a-number"
        ));
    }
}
