//! Backend Error Module
//!
//! This module defines the error type returned by every HTTP handler and
//! middleware in the backend.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and rejection conversions
//! ```
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers return
//! `Result<_, ApiError>` and use `?` freely. Every error renders as
//! `{"error": "<message>"}` with the status from `ApiError::status_code`.
//! Store and internal failures are logged with full detail but answered
//! with a generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
