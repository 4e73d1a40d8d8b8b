/**
 * Authenticated API Routes
 *
 * Everything registered here is wrapped by `auth_middleware` in
 * `create_router`, so handlers can rely on `AuthUser` being present.
 */

use axum::{
    routing::{get, put},
    Router,
};

use crate::backend::auth::update_user;
use crate::backend::products::{add_product, delete_product, get_product, get_products, update_product};
use crate::backend::server::state::AppState;

/// Configure authenticated routes
///
/// - `PUT /users/{id}` - Update a user
/// - `POST /products` - Add a product
/// - `GET /products` - List products
/// - `GET /products/{pid}` - Fetch a product
/// - `PUT /products/{pid}` - Replace a product
/// - `DELETE /products/{pid}` - Delete a product
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/users/{id}", put(update_user))
        .route("/products", get(get_products).post(add_product))
        .route(
            "/products/{pid}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
