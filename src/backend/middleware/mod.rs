//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Token gate for protected routes
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use storefront::backend::middleware::auth_middleware;
//!
//! let protected = router.route_layer(from_fn_with_state(app_state.clone(), auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, token_from_header, AuthUser, AuthenticatedUser};
