//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Handler exports
//! ├── types.rs    - Request schemas and response types
//! ├── signup.rs   - POST /signup
//! ├── login.rs    - POST /login
//! └── update.rs   - PUT /users/{id} (authenticated)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: name, username and password → user created (201)
//! 2. **Login**: username and password → credentials verified → JWT returned
//! 3. **Update**: JWT in `Authorization` → any subset of name, username, password changed

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Update user handler
pub mod update;

// Re-export commonly used types
pub use types::{LoginRequest, SignupRequest, SignupResponse, UpdateUserRequest};

// Re-export handlers
pub use login::login;
pub use signup::signup;
pub use update::update_user;
