//! Products Module
//!
//! CRUD over the product catalogue. Every route in this module sits behind
//! the auth middleware.
//!
//! # Module Structure
//!
//! ```text
//! products/
//! ├── mod.rs        - Module exports
//! ├── db.rs         - Product model and database operations
//! ├── types.rs      - Request schemas and response types
//! └── handlers.rs   - HTTP handlers
//! ```

/// Database operations for products
pub mod db;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use db::Product;
pub use handlers::{add_product, delete_product, get_product, get_products, update_product};
