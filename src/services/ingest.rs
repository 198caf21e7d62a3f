//! Dual-write ingestion pipeline: cache first, then persist.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, warn};

use crate::adapters::{CacheStore, DocumentStore};
use crate::domain::Quote;
use crate::error::{QuotesinkError, Result};
use crate::services::bounded;

/// Outcome of one ingest call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestResult {
    pub accepted: bool,
    pub symbol: String,
}

/// Validates a quote, updates the two per-symbol cache keys, then appends
/// the record to the document store.
///
/// Failure routing is asymmetric on purpose: the cache is the low-latency
/// read path, so a cache write failure fails the whole ingest, while a
/// document store failure is logged and discarded — the quote is still
/// accepted.
pub struct IngestPipeline {
    cache: Arc<dyn CacheStore>,
    documents: Arc<dyn DocumentStore>,
    op_timeout: Duration,
}

impl IngestPipeline {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        documents: Arc<dyn DocumentStore>,
        op_timeout: Duration,
    ) -> Self {
        Self {
            cache,
            documents,
            op_timeout,
        }
    }

    /// Ingest one quote. Calls are independent; concurrent ingests for the
    /// same symbol resolve by per-key last-writer-wins in the cache.
    pub async fn ingest(&self, quote: Quote) -> Result<IngestResult> {
        quote.validate()?;

        let price_key = quote.price_key();
        bounded(
            self.op_timeout,
            self.cache.set(&price_key, &quote.price.to_string()),
            || QuotesinkError::CacheWrite(format!("SET {price_key} timed out")),
        )
        .await?;

        let snapshot_key = quote.snapshot_key();
        let snapshot = serde_json::to_string(&quote)?;
        bounded(
            self.op_timeout,
            self.cache.set(&snapshot_key, &snapshot),
            || QuotesinkError::CacheWrite(format!("SET {snapshot_key} timed out")),
        )
        .await?;

        // Persistence failure is contained to this one call site; the
        // record is lost until a dead-letter backstop exists.
        match bounded(self.op_timeout, self.documents.insert(&quote), || {
            QuotesinkError::DocumentStoreWrite("insert timed out".to_string())
        })
        .await
        {
            Ok(()) => debug!(symbol = %quote.symbol, "Quote persisted"),
            Err(e) => {
                warn!(symbol = %quote.symbol, error = %e, "Document store write failed; quote not persisted");
            }
        }

        Ok(IngestResult {
            accepted: true,
            symbol: quote.symbol,
        })
    }
}
