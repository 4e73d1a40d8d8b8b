//! Common test utilities and helpers
//!
//! - Database and server fixtures
//! - Authentication helpers


// Re-export commonly used utilities
pub use auth_helpers::*;
pub use database::*;
