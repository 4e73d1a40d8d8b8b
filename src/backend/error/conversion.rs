/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`, plus conversions from Axum's extractor
 * rejections so a malformed body or path yields the same JSON error shape
 * as every other failure.
 *
 * # Response Format
 *
 * ```json
 * { "error": "Missing required field: pname" }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Json, Response},
};

use crate::backend::error::types::ApiError;
use crate::shared::ErrorResponse;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::Database(err) => tracing::error!("Store operation failed: {}", err),
            ApiError::Internal(detail) => tracing::error!("Internal failure: {}", detail),
            other => tracing::debug!(status = status.as_u16(), "Request rejected: {}", other),
        }

        (status, Json(ErrorResponse { error: self.message() })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}
