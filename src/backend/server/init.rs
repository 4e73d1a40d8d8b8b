/**
 * Server Initialization
 *
 * 1. Open and migrate the database pool
 * 2. Build the application state (pool, session keys, hashing cost)
 * 3. Create the router
 *
 * The pool is owned by `AppState`; the binary keeps a handle and closes it
 * after the server has shut down.
 */

use axum::Router;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{load_database, ServerConfig};
use crate::backend::server::state::AppState;

/// Open the database and build the application state
pub async fn init_state(config: &ServerConfig) -> Result<AppState, sqlx::Error> {
    tracing::info!("Initializing storefront backend");

    let db_pool = load_database(config).await?;
    let app_state = AppState::new(db_pool, config);

    tracing::info!(ttl_minutes = config.token_ttl.num_minutes(), "Session keys ready");

    Ok(app_state)
}

/// Create and configure the Axum application
pub fn create_app(app_state: AppState) -> Router<()> {
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
