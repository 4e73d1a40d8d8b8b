//! Authentication Module
//!
//! This module handles user registration, credential checks and session
//! tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── passwords.rs    - bcrypt hashing and verification
//! ├── sessions.rs     - JWT token management
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage and never logged
//! - JWT tokens (HS256) are used for stateless authentication
//! - Tokens expire after 10 minutes by default and cannot be revoked
//! - Invalid credentials return 401 with one message for every cause

/// User model and database operations
pub mod users;

/// Password hashing
pub mod passwords;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, signup, update_user};
pub use sessions::{InvalidToken, SessionKeys};
