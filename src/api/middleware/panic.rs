//! Converts handler panics into coded error responses.

use axum::response::{IntoResponse, Response};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

use crate::error::CodedError;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response;

/// Catches panics raised while handling a request and answers
/// 500 `UNEXPECTED_ERROR` with the generic message.
///
/// The panic payload is logged, never sent to the client.
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic payload".to_string()
    };

    CodedError::unexpected(format!("handler panicked: {detail}")).into_response()
}
