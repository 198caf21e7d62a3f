pub mod mongo_store;
pub mod redis_cache;
pub mod traits;

pub use mongo_store::MongoQuoteStore;
pub use redis_cache::RedisCache;
pub use traits::{CacheStore, DocumentStore};

#[cfg(test)]
pub use traits::{MockCacheStore, MockDocumentStore};
