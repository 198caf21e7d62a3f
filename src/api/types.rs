use serde::{Deserialize, Serialize};

use crate::services::{HealthReport, ProbeStatus};

// ============================================================================
// Ingestion Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub status: String,
    pub symbol: String,
}

// ============================================================================
// Query Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastPriceResponse {
    pub symbol: String,
    pub price: f64,
}

// ============================================================================
// Health Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub redis_status: ProbeStatus,
    pub mongodb_status: ProbeStatus,
}

impl From<HealthReport> for HealthResponse {
    fn from(report: HealthReport) -> Self {
        Self {
            redis_status: report.cache,
            mongodb_status: report.document_store,
        }
    }
}
