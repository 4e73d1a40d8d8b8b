/**
 * Backend Error Types
 *
 * `ApiError` covers every failure a request can end in:
 *
 * - Client errors: missing fields, malformed bodies or paths, duplicate usernames
 * - Authentication failures: missing or invalid tokens, bad credentials
 * - Lookup misses on users and products
 * - Store failures (sqlx) and internal failures (hashing, signing)
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use storefront::backend::error::ApiError;
/// use axum::http::StatusCode;
///
/// let err = ApiError::NotFound("Product not found");
/// assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request validation error (missing field)
    #[error(transparent)]
    Shared(#[from] SharedError),

    /// Body or path could not be parsed
    #[error("{0}")]
    BadRequest(String),

    /// Missing or invalid credentials
    #[error("{0}")]
    Unauthorized(&'static str),

    /// Lookup miss
    #[error("{0}")]
    NotFound(&'static str),

    /// Unique constraint violation
    #[error("{0}")]
    Duplicate(&'static str),

    /// Store failure
    ///
    /// The driver message is only ever logged; clients see a generic text.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Hashing, signing or other server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Shared`, `BadRequest`, `Duplicate`, `Database` - 400 Bad Request
    /// - `Unauthorized` - 401 Unauthorized
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Shared(_) | Self::BadRequest(_) | Self::Duplicate(_) | Self::Database(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message sent to the client
    pub fn message(&self) -> String {
        match self {
            Self::Shared(err) => err.to_string(),
            Self::BadRequest(message) => message.clone(),
            Self::Unauthorized(message) | Self::NotFound(message) | Self::Duplicate(message) => {
                (*message).to_string()
            }
            Self::Database(_) => "Database error".to_string(),
            Self::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(err: bcrypt::BcryptError) -> Self {
        match err {
            bcrypt::BcryptError::Truncation(_) => Self::BadRequest(format!(
                "Password must be at most {} bytes",
                crate::backend::auth::passwords::MAX_PASSWORD_BYTES
            )),
            err => Self::Internal(format!("password hashing failed: {}", err)),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(format!("token signing failed: {}", err))
    }
}
