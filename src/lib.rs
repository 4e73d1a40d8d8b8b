//! Storefront - Main Library
//!
//! Storefront is a small HTTP service for user accounts and a product
//! catalogue, built on Axum and SQLite (via sqlx). Accounts sign up with
//! a password, log in to receive a short-lived JWT, and present that token
//! on every product and account route.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by the server and its clients
//!   - JSON response envelopes
//!   - Request validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum router, auth middleware and handlers
//!   - Password hashing (bcrypt) and token issuance (jsonwebtoken)
//!   - SQLite-backed user and product stores
//!
//! # Usage
//!
//! ```rust,no_run
//! use storefront::backend::server::{config::ServerConfig, init::{create_app, init_state}};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let state = init_state(&config).await?;
//! let app = create_app(state);
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `SharedError` for request validation failures
//! - `ApiError` for everything a handler can return, rendered as
//!   `{"error": "..."}` with the matching HTTP status

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
