use thiserror::Error;

/// Main error type for the ingestion service
#[derive(Error, Debug)]
pub enum QuotesinkError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Boundary errors
    #[error("Validation failed: {0}")]
    Validation(String),

    // Cache store errors (never swallowed — the cache is the read path)
    #[error("Cache store unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Cache write failed: {0}")]
    CacheWrite(String),

    #[error("Cache read failed: {0}")]
    CacheRead(String),

    #[error("Symbol not found in cache: {symbol}")]
    NotFound { symbol: String },

    #[error("Corrupt cache entry at {key}: {value:?}")]
    CorruptCacheEntry { key: String, value: String },

    // Document store errors (contained at the ingest call site)
    #[error("Document store unavailable: {0}")]
    DocumentStoreUnavailable(String),

    #[error("Document store write failed: {0}")]
    DocumentStoreWrite(String),

    // Startup errors
    #[error("Cache store unreachable after {attempts} attempts")]
    StartupConnectivity { attempts: u32 },

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for QuotesinkError
pub type Result<T> = std::result::Result<T, QuotesinkError>;
