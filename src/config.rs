//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export WEATHER_API_KEY="your-weatherapi-key"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Required Variables
//!
//! - `WEATHER_API_KEY` - WeatherAPI.com API key
//!
//! ## Optional Variables
//!
//! - `WEATHER_API_URL` - Current-conditions endpoint (default: WeatherAPI.com `current.json`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CACHE_ENABLED` - Enable the in-memory cache (default: `true`)
//! - `CACHE_TTL_SECONDS` - Cached record lifetime (default: 600)
//! - `CACHE_MAX_ENTRIES` - Cache capacity bound (default: 10000)
//! - `UPSTREAM_TIMEOUT_MS` - Overall provider timeout, retries included (default: 9000)
//! - `UPSTREAM_MAX_ATTEMPTS` - Provider attempts per request (default: 3, max: 10)
//! - `UPSTREAM_BACKOFF_MS` - Linear back-off step between attempts (default: 1000)

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::cache::{DEFAULT_MAX_ENTRIES, DEFAULT_TTL};
use crate::infrastructure::provider::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT, RetryPolicy};

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// WeatherAPI.com key, sent as the `key` query parameter. Never logged.
    pub weather_api_key: String,
    pub weather_api_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When false, [`crate::infrastructure::cache::NullCache`] is used.
    pub cache_enabled: bool,
    pub cache_ttl_seconds: u64,
    /// Upper bound on cached cities; least recently used entries are evicted beyond it.
    pub cache_max_entries: u64,

    // ── Upstream client ─────────────────────────────────────────────────────
    /// Overall timeout for one provider call in milliseconds, back-off included.
    pub upstream_timeout_ms: u64,
    pub upstream_max_attempts: u32,
    pub upstream_backoff_ms: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WEATHER_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        let weather_api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY must be set")?;
        let weather_api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_enabled = env::var("CACHE_ENABLED")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        Ok(Self {
            weather_api_key,
            weather_api_url,
            listen_addr,
            log_level,
            log_format,
            cache_enabled,
            cache_ttl_seconds: env_or("CACHE_TTL_SECONDS", DEFAULT_TTL.as_secs()),
            cache_max_entries: env_or("CACHE_MAX_ENTRIES", DEFAULT_MAX_ENTRIES),
            upstream_timeout_ms: env_or("UPSTREAM_TIMEOUT_MS", millis(DEFAULT_TIMEOUT)),
            upstream_max_attempts: env_or(
                "UPSTREAM_MAX_ATTEMPTS",
                RetryPolicy::DEFAULT_MAX_ATTEMPTS,
            ),
            upstream_backoff_ms: env_or(
                "UPSTREAM_BACKOFF_MS",
                millis(RetryPolicy::DEFAULT_BACKOFF_STEP),
            ),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `weather_api_key` is empty
    /// - `weather_api_url` is not an `http(s)://` URL
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - any cache or upstream setting is out of range
    pub fn validate(&self) -> Result<()> {
        if self.weather_api_key.trim().is_empty() {
            anyhow::bail!("WEATHER_API_KEY must not be empty");
        }

        let url = url::Url::parse(&self.weather_api_url)
            .with_context(|| format!("WEATHER_API_URL is invalid: '{}'", self.weather_api_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!(
                "WEATHER_API_URL must start with 'http://' or 'https://', got '{}'",
                self.weather_api_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        if self.cache_max_entries == 0 {
            anyhow::bail!("CACHE_MAX_ENTRIES must be greater than 0");
        }

        if self.upstream_timeout_ms == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_MS must be greater than 0");
        }

        if self.upstream_max_attempts == 0 || self.upstream_max_attempts > 10 {
            anyhow::bail!(
                "UPSTREAM_MAX_ATTEMPTS must be between 1 and 10, got {}",
                self.upstream_max_attempts
            );
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Weather API: {}", self.weather_api_url);
        tracing::info!("  Weather API key: {}", mask_secret(&self.weather_api_key));

        if self.cache_enabled {
            tracing::info!(
                "  Cache: enabled (TTL: {}s, max entries: {})",
                self.cache_ttl_seconds,
                self.cache_max_entries
            );
        } else {
            tracing::info!("  Cache: disabled");
        }

        tracing::info!(
            "  Upstream: timeout {}ms, {} attempts, back-off step {}ms",
            self.upstream_timeout_ms,
            self.upstream_max_attempts,
            self.upstream_backoff_ms
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Reads and parses an optional variable, falling back to `default` when it
/// is unset or unparseable.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Masks a secret for logging, keeping at most the last four characters.
///
/// - `abcdef123456` → `***3456`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len <= 8 {
        return "***".to_string();
    }

    let tail: String = secret.chars().skip(len - 4).collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
