//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Redis connection URL; `None` selects the in-process cache
    pub cache_url: Option<String>,
    /// Upper bound on a single cache round trip, in milliseconds
    pub cache_timeout_ms: u64,
    /// In-memory cache expiry sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `CACHE_URL` - Redis URL such as `redis://127.0.0.1/` (default: unset, in-memory)
    /// - `CACHE_TIMEOUT_MS` - Cache round-trip timeout (default: 500)
    /// - `CLEANUP_INTERVAL` - In-memory expiry sweep frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            cache_url: env::var("CACHE_URL")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            cache_timeout_ms: parse_var("CACHE_TIMEOUT_MS").unwrap_or(defaults.cache_timeout_ms),
            cleanup_interval: parse_var("CLEANUP_INTERVAL").unwrap_or(defaults.cleanup_interval),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            cache_url: None,
            cache_timeout_ms: 500,
            cleanup_interval: 1,
        }
    }
}
