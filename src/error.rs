//! Client-facing error taxonomy.
//!
//! Every failure that reaches the HTTP layer is a [`CodedError`]: a stable
//! machine-readable [`ErrorCode`], the HTTP status it maps to, a user-facing
//! message and optional internal diagnostics. Only the upstream client
//! classifies raw transport/provider failures; every other layer passes
//! coded errors through unchanged.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

pub const MSG_INVALID_CITY: &str = "Invalid city name";
pub const MSG_INVALID_CITY_LENGTH: &str = "Invalid city name length";
pub const MSG_CITY_NOT_FOUND: &str = "City requested not found";
pub const MSG_EXT_API_ERROR: &str =
    "Weather data unavailable at the moment. Please try again later.";
pub const MSG_API_ERROR: &str = "Something went wrong during elaboration of the request";
pub const MSG_UNEXPECTED_ERROR: &str = "Internal server error";
pub const MSG_API_NOT_FOUND: &str = "Endpoint not found";

/// Stable error codes exposed in the `code` field of error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller supplied an unusable city name.
    InvalidCity,
    /// The provider does not know the requested city.
    CityNotFound,
    /// Provider outage, quota, key problem or timeout.
    ExtApiError,
    /// Unclassified provider response or incomplete payload.
    ApiError,
    /// Anything that was not raised as a coded error.
    UnexpectedError,
    /// No route matched the request.
    ApiNotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCity => "INVALID_CITY",
            Self::CityNotFound => "CITY_NOT_FOUND",
            Self::ExtApiError => "EXT_API_ERROR",
            Self::ApiError => "API_ERROR",
            Self::UnexpectedError => "UNEXPECTED_ERROR",
            Self::ApiNotFound => "API_NOT_FOUND",
        }
    }

    /// HTTP status associated with the code.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidCity => StatusCode::BAD_REQUEST,
            Self::CityNotFound | Self::ApiNotFound => StatusCode::NOT_FOUND,
            Self::ExtApiError | Self::ApiError | Self::UnexpectedError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified failure, carried unchanged from the point of classification
/// to the HTTP response.
///
/// `extra_info` holds internal diagnostics (provider messages, transport
/// errors). It is logged when the error is rendered and never serialized.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{code}: {message}")]
pub struct CodedError {
    code: ErrorCode,
    status: StatusCode,
    message: String,
    extra_info: Option<String>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'static str,
    error: &'a str,
}

impl CodedError {
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        extra_info: Option<String>,
    ) -> Self {
        Self {
            code,
            status: code.status(),
            message: message.into(),
            extra_info,
        }
    }

    pub fn invalid_city(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidCity, message, None)
    }

    pub fn city_not_found(extra_info: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::CityNotFound,
            MSG_CITY_NOT_FOUND,
            Some(extra_info.into()),
        )
    }

    pub fn ext_api_error(extra_info: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ExtApiError,
            MSG_EXT_API_ERROR,
            Some(extra_info.into()),
        )
    }

    pub fn api_error(extra_info: impl Into<String>) -> Self {
        Self::new(ErrorCode::ApiError, MSG_API_ERROR, Some(extra_info.into()))
    }

    pub fn unexpected(extra_info: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::UnexpectedError,
            MSG_UNEXPECTED_ERROR,
            Some(extra_info.into()),
        )
    }

    pub fn api_not_found() -> Self {
        Self::new(ErrorCode::ApiNotFound, MSG_API_NOT_FOUND, None)
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn extra_info(&self) -> Option<&str> {
        self.extra_info.as_deref()
    }
}

impl From<anyhow::Error> for CodedError {
    fn from(e: anyhow::Error) -> Self {
        Self::unexpected(format!("{e:#}"))
    }
}

impl IntoResponse for CodedError {
    fn into_response(self) -> Response {
        let extra = self.extra_info.as_deref().unwrap_or("-");
        if self.status.is_server_error() {
            tracing::error!(code = %self.code, extra_info = extra, "{}", self.message);
        } else {
            tracing::debug!(code = %self.code, extra_info = extra, "{}", self.message);
        }

        let body = ErrorBody {
            code: self.code.as_str(),
            error: &self.message,
        };

        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(ErrorCode::InvalidCity.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::CityNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::ApiNotFound.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::ExtApiError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ErrorCode::ApiError.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            ErrorCode::UnexpectedError.status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_response_body_shape() {
        let response = CodedError::city_not_found("provider code 1006").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(
            json,
            serde_json::json!({ "code": "CITY_NOT_FOUND", "error": "City requested not found" })
        );
    }

    #[tokio::test]
    async fn test_extra_info_never_serialized() {
        let response =
            CodedError::ext_api_error("API key has exceeded calls per month quota.").into_response();
        let json = body_json(response).await;

        assert_eq!(json["code"], "EXT_API_ERROR");
        assert_eq!(json["error"], MSG_EXT_API_ERROR);
        assert!(json.get("extra_info").is_none());
        assert!(!json.to_string().contains("quota"));
    }

    #[tokio::test]
    async fn test_anyhow_maps_to_unexpected() {
        let err: CodedError = anyhow::anyhow!("secret stack detail").into();
        assert_eq!(err.code(), ErrorCode::UnexpectedError);

        let json = body_json(err.into_response()).await;
        assert_eq!(
            json,
            serde_json::json!({ "code": "UNEXPECTED_ERROR", "error": "Internal server error" })
        );
    }
}
