pub mod adapters;
pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;

#[cfg(test)]
pub mod testsupport;

pub use adapters::{CacheStore, DocumentStore, MongoQuoteStore, RedisCache};
pub use api::{create_router, serve, AppState};
pub use config::AppConfig;
pub use domain::Quote;
pub use error::{QuotesinkError, Result};
pub use services::{
    await_cache_ready, HealthReport, HealthReporter, IngestPipeline, IngestResult, ProbeStatus,
    QueryService, RetryPolicy,
};
