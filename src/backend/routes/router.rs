/**
 * Router Configuration
 *
 * Public routes and the authenticated API are assembled into one router.
 * The auth middleware is attached with `route_layer`, so it runs only for
 * matched protected routes and unknown paths still reach the 404 fallback.
 * A known path called with the wrong method gets a JSON 405.
 */

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::backend::auth::{login, signup};
use crate::backend::middleware::auth_middleware;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;
use crate::shared::ErrorResponse;

/// Create the Axum router with all routes configured
///
/// 1. **Public Routes**: `/`, `/health`, `/signup`, `/login`
/// 2. **Authenticated Routes**: users and products, behind `auth_middleware`
/// 3. **Fallback Handlers**: JSON 404 for unknown paths, JSON 405 for
///    unsupported methods
/// 4. **Tracing**: one span per request
pub fn create_router(app_state: AppState) -> Router<()> {
    let protected = configure_api_routes(Router::new())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    Router::new()
        .route("/", get(home))
        .route("/health", get(health))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .merge(protected)
        .method_not_allowed_fallback(method_not_allowed)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

async fn home() -> &'static str {
    "Welcome to the Storefront API!"
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
}

async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            error: "Method not allowed".to_string(),
        }),
    )
}
