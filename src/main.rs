use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use quotesink::adapters::{CacheStore, DocumentStore, MongoQuoteStore, RedisCache};
use quotesink::config::AppConfig;
use quotesink::error::Result;
use quotesink::services::{await_cache_ready, RetryPolicy};
use quotesink::{api, AppState};

#[derive(Debug, Parser)]
#[command(name = "quotesink", about = "Market quote ingestion service")]
struct Cli {
    /// Configuration directory (holds default.toml)
    #[arg(long, default_value = "config")]
    config_dir: PathBuf,

    /// Override the configured API port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = AppConfig::load_from(&cli.config_dir)?;
    let port = cli.port.unwrap_or(config.server.port);

    let cache: Arc<dyn CacheStore> = Arc::new(RedisCache::connect(&config.cache)?);
    let documents: Arc<dyn DocumentStore> =
        Arc::new(MongoQuoteStore::connect(&config.document_store).await?);

    // Serving is gated on the cache store: no listener until it answers.
    let policy = RetryPolicy::from(&config.startup);
    if let Err(e) = await_cache_ready(cache.as_ref(), &policy).await {
        error!("FATAL: {}", e);
        return Err(e);
    }

    let state = AppState::new(cache, documents, config.timeouts.store_op());
    info!(port, "Startup complete");
    api::serve(state, port).await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quotesink=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
