//! In-memory store fakes with failure injection, shared by service and
//! router tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::adapters::{CacheStore, DocumentStore};
use crate::domain::Quote;
use crate::error::{QuotesinkError, Result};

/// Key-value fake standing in for the cache store
#[derive(Default)]
pub struct InMemoryCache {
    entries: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
    failing_pings: AtomicU32,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Make the next `count` pings fail, then recover
    pub fn fail_next_pings(&self, count: u32) {
        self.failing_pings.store(count, Ordering::SeqCst);
    }

    /// Seed an entry directly, bypassing the pipeline
    pub fn put(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .expect("cache lock")
            .insert(key.to_string(), value.to_string());
    }

    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.lock().expect("cache lock").get(key).cloned()
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn ping(&self) -> Result<()> {
        let remaining = self.failing_pings.load(Ordering::SeqCst);
        if remaining > 0 {
            self.failing_pings.store(remaining - 1, Ordering::SeqCst);
            return Err(QuotesinkError::CacheUnavailable(
                "injected ping failure".to_string(),
            ));
        }
        Ok(())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(QuotesinkError::CacheWrite(
                "injected write failure".to_string(),
            ));
        }
        self.put(key, value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entry(key))
    }
}

/// Append-only fake standing in for the document store
#[derive(Default)]
pub struct InMemoryDocumentStore {
    records: Mutex<Vec<Quote>>,
    fail_inserts: AtomicBool,
    fail_pings: AtomicBool,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_inserts(&self, fail: bool) {
        self.fail_inserts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_pings(&self, fail: bool) {
        self.fail_pings.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self) -> Vec<Quote> {
        self.records.lock().expect("records lock").clone()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, quote: &Quote) -> Result<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(QuotesinkError::DocumentStoreWrite(
                "injected insert failure".to_string(),
            ));
        }
        self.records.lock().expect("records lock").push(quote.clone());
        Ok(())
    }

    async fn ping_admin(&self) -> Result<()> {
        if self.fail_pings.load(Ordering::SeqCst) {
            return Err(QuotesinkError::DocumentStoreUnavailable(
                "injected ping failure".to_string(),
            ));
        }
        Ok(())
    }
}
