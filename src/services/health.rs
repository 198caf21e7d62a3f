//! On-demand health reporting for both stores.
//!
//! Probes are live on every call (no cached results) and isolated from each
//! other: one store being down must not hide the other's status.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::adapters::{CacheStore, DocumentStore};
use crate::error::QuotesinkError;
use crate::services::bounded;

/// Result of probing one store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbeStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "FAIL")]
    Fail,
}

impl ProbeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Fail => "FAIL",
        }
    }
}

/// Per-store statuses, reported independently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub cache: ProbeStatus,
    pub document_store: ProbeStatus,
}

pub struct HealthReporter {
    cache: Arc<dyn CacheStore>,
    documents: Arc<dyn DocumentStore>,
    op_timeout: Duration,
}

impl HealthReporter {
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

    /// Probe both stores concurrently and report each status on its own.
    pub async fn check(&self) -> HealthReport {
        let (cache, document_store) = tokio::join!(self.probe_cache(), self.probe_documents());
        HealthReport {
            cache,
            document_store,
        }
    }

    async fn probe_cache(&self) -> ProbeStatus {
        match bounded(self.op_timeout, self.cache.ping(), || {
            QuotesinkError::CacheUnavailable("probe timed out".to_string())
        })
        .await
        {
            Ok(()) => ProbeStatus::Ok,
            Err(e) => {
                warn!(error = %e, "Cache store probe failed");
                ProbeStatus::Fail
            }
        }
    }

    async fn probe_documents(&self) -> ProbeStatus {
        match bounded(self.op_timeout, self.documents.ping_admin(), || {
            QuotesinkError::DocumentStoreUnavailable("probe timed out".to_string())
        })
        .await
        {
            Ok(()) => ProbeStatus::Ok,
            Err(e) => {
                warn!(error = %e, "Document store probe failed");
                ProbeStatus::Fail
            }
        }
    }
}
