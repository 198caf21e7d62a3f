use async_trait::async_trait;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};
use tracing::debug;

use crate::adapters::traits::DocumentStore;
use crate::config::DocumentStoreConfig;
use crate::domain::Quote;
use crate::error::{QuotesinkError, Result};

/// MongoDB-backed document store handle.
///
/// The driver connects lazily, so construction succeeds even while the
/// server is down; individual operations surface the failure instead.
pub struct MongoQuoteStore {
    client: Client,
    quotes: Collection<Document>,
}

impl MongoQuoteStore {
    /// Create a document store handle targeting the configured quote
    /// history collection.
    pub async fn connect(config: &DocumentStoreConfig) -> Result<Self> {
        let client = Client::with_uri_str(config.uri())
            .await
            .map_err(|e| QuotesinkError::DocumentStoreUnavailable(e.to_string()))?;
        let quotes = client
            .database(&config.database)
            .collection(&config.collection);
        debug!(
            database = %config.database,
            collection = %config.collection,
            "Document store handle created"
        );
        Ok(Self { client, quotes })
    }
}

#[async_trait]
impl DocumentStore for MongoQuoteStore {
    async fn insert(&self, quote: &Quote) -> Result<()> {
        let record = mongodb::bson::to_document(quote)
            .map_err(|e| QuotesinkError::DocumentStoreWrite(e.to_string()))?;
        self.quotes
            .insert_one(record)
            .await
            .map_err(|e| QuotesinkError::DocumentStoreWrite(e.to_string()))?;
        Ok(())
    }

    async fn ping_admin(&self) -> Result<()> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| QuotesinkError::DocumentStoreUnavailable(e.to_string()))?;
        Ok(())
    }
}
