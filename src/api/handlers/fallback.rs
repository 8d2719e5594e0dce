//! Handler for unmatched routes.

use crate::error::CodedError;

/// Responds 404 `API_NOT_FOUND` for any path or method without a route.
pub async fn not_found_handler() -> CodedError {
    CodedError::api_not_found()
}
