//! Recent Notes - a note-taking server
//!
//! Serves note CRUD over HTTP and tracks recently viewed notes in a cache.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recent_notes::api::{create_router, AppState};
use recent_notes::cache::{CacheTransport, InMemoryCache, RedisCache};
use recent_notes::{spawn_cleanup_task, Config};

/// Main entry point for the notes server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the cache transport (Redis, or in-memory with a TTL sweep)
/// 4. Create Axum router with all endpoints
/// 5. Start HTTP server on configured port
/// 6. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "recent_notes=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Recent Notes server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache={}, cache_timeout={}ms, cleanup_interval={}s",
        config.server_port,
        if config.cache_url.is_some() { "redis" } else { "in-memory" },
        config.cache_timeout_ms,
        config.cleanup_interval
    );

    let (cache, cleanup_handle) = build_cache(&config).await?;
    let state = AppState::with_cache(cache);

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Builds the process-wide cache handle selected by `CACHE_URL`.
///
/// The in-memory backend comes with its expiry sweep task.
async fn build_cache(
    config: &Config,
) -> anyhow::Result<(Arc<dyn CacheTransport>, Option<JoinHandle<()>>)> {
    match &config.cache_url {
        Some(url) => {
            let timeout = Duration::from_millis(config.cache_timeout_ms);
            let redis = RedisCache::connect(url, timeout)
                .await
                .context("failed to connect to the Redis cache")?;
            let cache: Arc<dyn CacheTransport> = Arc::new(redis);
            Ok((cache, None))
        }
        None => {
            let memory = Arc::new(InMemoryCache::new());
            let handle = spawn_cleanup_task(memory.clone(), config.cleanup_interval);
            info!("In-memory cache initialized");
            let cache: Arc<dyn CacheTransport> = memory;
            Ok((cache, Some(handle)))
        }
    }
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
