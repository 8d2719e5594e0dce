//! HTTP server initialization and runtime setup.
//!
//! Builds the cache, the provider client and the weather service, then runs
//! the Axum server until a shutdown signal arrives.

use crate::application::services::WeatherService;
use crate::config::Config;
use crate::infrastructure::cache::{MemoryCache, NullCache, WeatherCache};
use crate::infrastructure::provider::WeatherApiClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds the shared application state from configuration.
///
/// # Errors
///
/// Returns an error if the provider client cannot be created.
pub fn build_state(config: &Config) -> Result<AppState> {
    let cache_ttl = Duration::from_secs(config.cache_ttl_seconds);

    let cache: Arc<dyn WeatherCache> = if config.cache_enabled {
        Arc::new(MemoryCache::new(config.cache_max_entries, cache_ttl))
    } else {
        tracing::info!("Cache disabled (NullCache)");
        Arc::new(NullCache::new())
    };

    let provider = Arc::new(WeatherApiClient::from_config(config)?);
    tracing::info!("Weather provider client ready");

    let weather_service = Arc::new(WeatherService::new(provider, cache, cache_ttl));

    Ok(AppState::new(weather_service))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory cache (or NullCache when disabled)
/// - WeatherAPI.com client
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The provider client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
