//! Shared Error Types
//!
//! Errors raised while turning a loosely-typed JSON body into a request the
//! server can act on. Every request schema keeps its fields optional and
//! reports the first absent one through `SharedError::MissingField`, so a
//! missing key becomes a typed 400 instead of a deserialization failure.
//!
//! # Usage
//!
//! ```rust
//! use storefront::shared::error::SharedError;
//!
//! let error = SharedError::missing("username");
//! assert_eq!(error.to_string(), "Missing required field: username");
//! ```
use thiserror::Error;

/// Request validation errors
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SharedError {
    /// A required field was absent or `null`
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the JSON key, as the client sends it
        field: &'static str,
    },
}

impl SharedError {
    /// Create a new missing-field error
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}

/// Unwrap an optional request field or report it as missing
pub fn require<T>(value: Option<T>, field: &'static str) -> Result<T, SharedError> {
    value.ok_or(SharedError::missing(field))
}
