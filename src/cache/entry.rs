//! Cache Entry Module
//!
//! A stored value plus its optional expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single value held by the in-memory cache.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored value
    pub value: String,
    /// Deadline after which the entry reads as absent, None = no expiration
    pub expires_at: Option<Instant>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry that expires `ttl_seconds` from now, or never.
    pub fn new(value: String, ttl_seconds: Option<u64>) -> Self {
        Self::new_at(value, ttl_seconds, Instant::now())
    }

    /// Creates an entry whose TTL is counted from `now`.
    pub fn new_at(value: String, ttl_seconds: Option<u64>, now: Instant) -> Self {
        Self {
            value,
            expires_at: ttl_seconds.map(|ttl| now + Duration::from_secs(ttl)),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired as of `now`.
    ///
    /// An entry is expired once `now` reaches its deadline, so a zero TTL
    /// expires immediately.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }

    /// Checks whether the entry has expired as of the current instant.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_without_ttl_never_expires() {
        let now = Instant::now();
        let entry = CacheEntry::new_at("value".to_string(), None, now);

        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(now + Duration::from_secs(86_400)));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new_at("value".to_string(), Some(60), now);

        assert!(!entry.is_expired_at(now + Duration::from_secs(59)));
        assert!(entry.is_expired_at(now + Duration::from_secs(60)));
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let now = Instant::now();
        let entry = CacheEntry::new_at("value".to_string(), Some(0), now);

        assert!(entry.is_expired_at(now));
    }
}
