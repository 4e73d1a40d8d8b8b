/**
 * Application State Management
 *
 * `AppState` is built once at startup and cloned into every handler. The
 * pool and the session keys are cheap to clone; nothing in here is mutable.
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(pool): State<SqlitePool>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::server::config::ServerConfig;

/// Application state shared by all handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Token signing and verification keys
    pub sessions: Arc<SessionKeys>,

    /// bcrypt work factor for new password hashes
    pub password_cost: u32,

    /// Hash checked when a login names an unknown user, so that path costs
    /// as much bcrypt work as a wrong password
    pub unknown_user_hash: Arc<str>,
}

impl AppState {
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        let unknown_user_hash = hash_password("storefront-unknown-user", config.bcrypt_cost)
            .unwrap_or_else(|e| {
                tracing::error!("Failed to prepare unknown-user hash: {}", e);
                String::new()
            });

        Self {
            db_pool,
            sessions: Arc::new(SessionKeys::new(&config.jwt_secret, config.token_ttl)),
            password_cost: config.bcrypt_cost,
            unknown_user_hash: unknown_user_hash.into(),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}
