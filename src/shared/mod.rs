//! Shared Module
//!
//! Types that cross the HTTP boundary in both directions. The server
//! serializes them and clients (including the integration tests) decode
//! them, so they carry no server-only dependencies.

/// JSON response envelopes
pub mod api;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use api::{ErrorResponse, MessageResponse, TokenResponse};
pub use error::SharedError;
