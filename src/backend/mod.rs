//! Backend Module
//!
//! All server-side code: an Axum HTTP server with user accounts, session
//! tokens and a product catalogue stored in SQLite.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Router assembly (public and authenticated routes)
//! - **`auth`** - Users, password hashing, JWT sessions, auth handlers
//! - **`products`** - Product store and CRUD handlers
//! - **`middleware`** - Token gate for protected routes
//! - **`error`** - `ApiError` and its HTTP rendering
//!
//! # Request Flow
//!
//! ```text
//! client → Router → [auth_middleware] → handler → store (SqlitePool) → JSON
//! ```
//!
//! The middleware only verifies the token signature and expiry; it never
//! touches the database, so unauthenticated requests are rejected before
//! any store access.
//!
//! # State Management
//!
//! `AppState` holds the `SqlitePool`, the `SessionKeys` and the bcrypt
//! cost. It is cloned into handlers through Axum's `State` extractor.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Product catalogue
pub mod products;

/// Middleware for request processing
pub mod middleware;

/// Re-export commonly used types
pub use error::ApiError;
pub use server::{create_app, init_state, AppState, ServerConfig};
