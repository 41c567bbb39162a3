//! Cache Module
//!
//! The key-value transport the recent-notes list lives in. Two backends:
//! an in-process map with TTL expiry, and Redis.

mod entry;
mod memory;
mod redis_cache;

use async_trait::async_trait;

use crate::error::CacheResult;

// Re-export public types
pub use entry::CacheEntry;
pub use memory::InMemoryCache;
pub use redis_cache::RedisCache;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;

/// Maximum allowed value size in bytes
pub const MAX_VALUE_SIZE: usize = 1024 * 1024; // 1 MB

// == Cache Transport ==
/// String-keyed, string-valued store with optional per-key expiry.
///
/// Operations on different keys are independent; nothing here is
/// transactional.
#[async_trait]
pub trait CacheTransport: Send + Sync {
    /// Returns the value under `key`, or `None` when absent or expired.
    async fn get(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// `ttl` is in seconds; `None` keeps the value until deleted or evicted.
    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> CacheResult<()>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> CacheResult<()>;

    /// Removes every key.
    async fn clear(&self) -> CacheResult<()>;
}
