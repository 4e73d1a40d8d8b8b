//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation, public routes, fallback
//! └── api_routes.rs   - Authenticated user and product routes
//! ```
//!
//! # Route Types
//!
//! ## Public
//!
//! - `GET /` - Welcome text
//! - `GET /health` - Liveness probe
//! - `POST /signup` - User registration
//! - `POST /login` - Token issuance
//!
//! ## Authenticated (`Authorization: <token>`)
//!
//! - `PUT /users/{id}`
//! - `POST /products`, `GET /products`
//! - `GET /products/{pid}`, `PUT /products/{pid}`, `DELETE /products/{pid}`

/// Main router creation
pub mod router;

/// Authenticated API routes
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
