use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tokio::sync::Mutex;
use tracing::debug;

use crate::adapters::traits::CacheStore;
use crate::config::CacheConfig;
use crate::error::{QuotesinkError, Result};

/// Redis-backed cache store handle.
///
/// Construction is pure (no I/O): the underlying connection manager is
/// established on first use and cached, so connectivity failures belong to
/// the readiness gate and the serving paths, not to process wiring.
pub struct RedisCache {
    client: Client,
    manager: Mutex<Option<ConnectionManager>>,
}

impl RedisCache {
    /// Create a cache handle from configuration. Fails only on a malformed
    /// connection URL, never on an unreachable server.
    pub fn connect(config: &CacheConfig) -> Result<Self> {
        let client = Client::open(config.url())
            .map_err(|e| QuotesinkError::Internal(format!("invalid cache URL: {e}")))?;
        Ok(Self {
            client,
            manager: Mutex::new(None),
        })
    }

    /// Get the shared connection manager, establishing it on first call.
    /// A failed attempt leaves nothing cached, so the next call retries.
    async fn manager(&self) -> redis::RedisResult<ConnectionManager> {
        let mut guard = self.manager.lock().await;
        if let Some(manager) = guard.as_ref() {
            return Ok(manager.clone());
        }
        let manager = ConnectionManager::new(self.client.clone()).await?;
        debug!("Cache store connection established");
        *guard = Some(manager.clone());
        Ok(manager)
    }
}

#[async_trait]
impl CacheStore for RedisCache {
    async fn ping(&self) -> Result<()> {
        let mut conn = self
            .manager()
            .await
            .map_err(|e| QuotesinkError::CacheUnavailable(e.to_string()))?;
        let _pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| QuotesinkError::CacheUnavailable(e.to_string()))?;
        Ok(())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self
            .manager()
            .await
            .map_err(|e| QuotesinkError::CacheWrite(e.to_string()))?;
        let _: () = conn
            .set(key, value)
            .await
            .map_err(|e| QuotesinkError::CacheWrite(format!("SET {key}: {e}")))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self
            .manager()
            .await
            .map_err(|e| QuotesinkError::CacheRead(e.to_string()))?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| QuotesinkError::CacheRead(format!("GET {key}: {e}")))?;
        Ok(value)
    }
}
