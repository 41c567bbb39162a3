//! Redis Cache Module
//!
//! Cache transport backed by a Redis server through a multiplexed
//! `ConnectionManager`, which reconnects on its own after failures.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::info;

use crate::cache::CacheTransport;
use crate::error::{CacheError, CacheResult};

// == Redis Cache ==
pub struct RedisCache {
    connection_manager: ConnectionManager,
    timeout: Duration,
}

impl RedisCache {
    /// Opens a managed connection to `url`, e.g. `redis://127.0.0.1:6379/0`.
    ///
    /// Every command issued afterwards is bounded by `timeout`.
    pub async fn connect(url: &str, timeout: Duration) -> CacheResult<Self> {
        let client = redis::Client::open(url)?;
        let connection_manager = bounded(timeout, client.get_connection_manager()).await?;
        info!("Connected to Redis cache");

        Ok(Self {
            connection_manager,
            timeout,
        })
    }
}

async fn bounded<T, F>(timeout: Duration, fut: F) -> CacheResult<T>
where
    F: Future<Output = redis::RedisResult<T>>,
{
    match tokio::time::timeout(timeout, fut).await {
        Ok(result) => result.map_err(CacheError::from),
        Err(_) => Err(CacheError::Timeout(timeout.as_millis() as u64)),
    }
}

#[async_trait]
impl CacheTransport for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<String>> {
        let mut conn = self.connection_manager.clone();
        bounded(self.timeout, conn.get(key)).await
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<u64>) -> CacheResult<()> {
        let mut conn = self.connection_manager.clone();
        match ttl {
            Some(seconds) => bounded(self.timeout, conn.set_ex(key, value, seconds)).await,
            None => bounded(self.timeout, conn.set(key, value)).await,
        }
    }

    async fn delete(&self, key: &str) -> CacheResult<()> {
        let mut conn = self.connection_manager.clone();
        bounded(self.timeout, conn.del(key)).await
    }

    async fn clear(&self) -> CacheResult<()> {
        let mut conn = self.connection_manager.clone();
        bounded(self.timeout, redis::cmd("FLUSHDB").query_async(&mut conn)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisCache::connect("not a redis url", Duration::from_millis(100)).await;
        assert!(matches!(result, Err(CacheError::Unavailable(_))));
    }
}
