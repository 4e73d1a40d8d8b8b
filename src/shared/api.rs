//! JSON Response Envelopes
//!
//! Every endpoint answers with one of these shapes. Failures always use
//! `ErrorResponse`, so clients can branch on the `error` key alone.

use serde::{Deserialize, Serialize};

/// Plain acknowledgement, e.g. `{"message": "Product deleted successfully"}`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body returned for every non-2xx response
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Successful login
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    /// Signed JWT; send it back verbatim in the `Authorization` header
    pub token: String,
}
