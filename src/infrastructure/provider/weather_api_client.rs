//! WeatherAPI.com client with bounded retry, overall timeout and error
//! classification.

use super::dto::{WaCurrent, WaResponse};
use super::retry::RetryPolicy;
use crate::config::Config;
use crate::domain::entities::{SanitizedCity, WeatherRecord};
use crate::domain::providers::WeatherProvider;
use crate::error::CodedError;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::ACCEPT};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Default overall timeout for one provider call, retries included.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(9000);

/// Default current-conditions endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.weatherapi.com/v1/current.json";

/// Provider error codes that indicate a provider-side or account problem.
///
/// - 1005: API request url is invalid
/// - 2006: API key provided is invalid
/// - 2007: API key has exceeded calls per month quota
/// - 2008: API key has been disabled
/// - 2009: API key does not have access to the resource
/// - 9999: Internal application error
const EXT_API_ERROR_CODES: &[i64] = &[1005, 2006, 2007, 2008, 2009, 9999];

/// Provider error code for "No location found matching parameter 'q'".
const NO_LOCATION_FOUND: i64 = 1006;

/// Result of a single HTTP attempt.
enum AttemptOutcome {
    /// Final answer, no further attempts.
    Done(Result<WeatherRecord, CodedError>),
    /// Connection-level failure or 5xx; carries the error to report if no
    /// attempts remain.
    Retryable(CodedError),
}

/// Client for the WeatherAPI.com current-conditions endpoint.
///
/// Holds a pooled [`reqwest::Client`], shared by every request task.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    timeout: Duration,
    retry: RetryPolicy,
}

impl WeatherApiClient {
    /// Creates a client for `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built (e.g. TLS backend
    /// initialization fails).
    pub fn new(
        endpoint: Url,
        api_key: String,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Result<Self> {
        // No per-request timeout; `fetch_with_timeout` bounds the whole call.
        let http = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint,
            api_key,
            timeout,
            retry,
        })
    }

    /// Creates a client from service configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `WEATHER_API_URL` is not a valid URL or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = Url::parse(&config.weather_api_url)
            .with_context(|| format!("Invalid WEATHER_API_URL '{}'", config.weather_api_url))?;

        Self::new(
            endpoint,
            config.weather_api_key.clone(),
            Duration::from_millis(config.upstream_timeout_ms),
            RetryPolicy::new(
                config.upstream_max_attempts,
                Duration::from_millis(config.upstream_backoff_ms),
            ),
        )
    }

    /// Fetches current conditions, bounding the whole call (every attempt and
    /// back-off sleep) by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `EXT_API_ERROR` if `timeout` elapses; otherwise see
    /// [`WeatherProvider::fetch_current`].
    pub async fn fetch_with_timeout(
        &self,
        city: &SanitizedCity,
        timeout: Duration,
    ) -> Result<WeatherRecord, CodedError> {
        match tokio::time::timeout(timeout, self.fetch_with_retry(city)).await {
            Ok(result) => result,
            Err(_) => {
                warn!(
                    "Upstream call for '{}' timed out after {}ms",
                    city,
                    timeout.as_millis()
                );
                Err(CodedError::ext_api_error(format!(
                    "timed out after {}ms",
                    timeout.as_millis()
                )))
            }
        }
    }

    async fn fetch_with_retry(&self, city: &SanitizedCity) -> Result<WeatherRecord, CodedError> {
        let mut attempt: u32 = 1;

        loop {
            match self.attempt(city).await {
                AttemptOutcome::Done(result) => return result,
                AttemptOutcome::Retryable(error) => {
                    if !self.retry.allows_retry_after(attempt) {
                        warn!(
                            attempts = attempt,
                            extra_info = error.extra_info().unwrap_or("-"),
                            "Upstream retries exhausted for '{}'",
                            city
                        );
                        return Err(error);
                    }

                    let delay = self.retry.delay_for(attempt);
                    warn!(
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        delay = ?delay,
                        extra_info = error.extra_info().unwrap_or("-"),
                        "Upstream attempt failed for '{}', retrying",
                        city
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn attempt(&self, city: &SanitizedCity) -> AttemptOutcome {
        let sent = self
            .http
            .get(self.endpoint.clone())
            .query(&[("key", self.api_key.as_str()), ("q", city.as_str())])
            .header(ACCEPT, "application/json")
            .send()
            .await;

        // `without_url` keeps the API key out of diagnostics.
        let response = match sent {
            Ok(response) => response,
            Err(e) => {
                return AttemptOutcome::Retryable(CodedError::ext_api_error(format!(
                    "transport error: {}",
                    e.without_url()
                )));
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return AttemptOutcome::Retryable(CodedError::ext_api_error(format!(
                    "failed to read response body: {}",
                    e.without_url()
                )));
            }
        };

        debug!("Upstream responded {} for '{}'", status, city);

        if status.is_server_error() {
            return AttemptOutcome::Retryable(classify_failure(status, &body));
        }

        if !status.is_success() {
            return AttemptOutcome::Done(Err(classify_failure(status, &body)));
        }

        AttemptOutcome::Done(parse_success(&body))
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn fetch_current(&self, city: &SanitizedCity) -> Result<WeatherRecord, CodedError> {
        self.fetch_with_timeout(city, self.timeout).await
    }
}

/// Maps a provider `error.code` to a client-facing error.
pub fn classify_error_code(code: i64, extra_info: impl Into<String>) -> CodedError {
    if code == NO_LOCATION_FOUND {
        CodedError::city_not_found(extra_info)
    } else if EXT_API_ERROR_CODES.contains(&code) {
        CodedError::ext_api_error(extra_info)
    } else {
        CodedError::api_error(extra_info)
    }
}

/// Classifies a non-success response from its body.
fn classify_failure(status: StatusCode, body: &str) -> CodedError {
    match serde_json::from_str::<WaResponse>(body) {
        Ok(WaResponse {
            error: Some(error), ..
        }) => match error.code {
            Some(code) => classify_error_code(
                code,
                format!(
                    "HTTP {}, provider code {}: {}",
                    status,
                    code,
                    error.message.as_deref().unwrap_or("-")
                ),
            ),
            None => CodedError::api_error(format!("HTTP {status}, error without code")),
        },
        _ => CodedError::api_error(format!(
            "HTTP {}, unrecognised error body: {}",
            status,
            truncate_body(body)
        )),
    }
}

/// Parses a 2xx body into a validated record.
fn parse_success(body: &str) -> Result<WeatherRecord, CodedError> {
    let parsed: WaResponse = serde_json::from_str(body)
        .map_err(|e| CodedError::api_error(format!("malformed response body: {e}")))?;

    if let Some(error) = parsed.error {
        return Err(match error.code {
            Some(code) => classify_error_code(
                code,
                format!(
                    "provider code {} on success status: {}",
                    code,
                    error.message.as_deref().unwrap_or("-")
                ),
            ),
            None => CodedError::api_error("error without code on success status"),
        });
    }

    let current = parsed
        .current
        .ok_or_else(|| CodedError::api_error("response has no 'current' object"))?;

    into_record(current)
}

fn into_record(current: WaCurrent) -> Result<WeatherRecord, CodedError> {
    WeatherRecord::from_parts(
        current.temp_c,
        current.condition.and_then(|c| c.text),
        current.humidity,
        current.wind_kph,
        current.uv,
    )
    .ok_or_else(|| CodedError::api_error("incomplete weather payload"))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
