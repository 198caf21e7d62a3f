use std::sync::Arc;
use std::time::Duration;

use crate::adapters::{CacheStore, DocumentStore};
use crate::services::{HealthReporter, IngestPipeline, QueryService};

/// Shared application state for API handlers.
///
/// The store handles are injected once at construction; nothing reaches for
/// ambient globals, so tests substitute fakes freely.
#[derive(Clone)]
pub struct AppState {
    pub ingest: Arc<IngestPipeline>,
    pub query: Arc<QueryService>,
    pub health: Arc<HealthReporter>,
}

impl AppState {
    pub fn new(
        cache: Arc<dyn CacheStore>,
        documents: Arc<dyn DocumentStore>,
        op_timeout: Duration,
    ) -> Self {
        Self {
            ingest: Arc::new(IngestPipeline::new(
                Arc::clone(&cache),
                Arc::clone(&documents),
                op_timeout,
            )),
            query: Arc::new(QueryService::new(Arc::clone(&cache), op_timeout)),
            health: Arc::new(HealthReporter::new(cache, documents, op_timeout)),
        }
    }
}
