/**
 * Login Handler
 *
 * POST /login
 *
 * Looks the user up by username, verifies the password with bcrypt and
 * returns a fresh session token. Unknown users and wrong passwords get the
 * same 401, and an unknown user is still checked against a throwaway hash
 * at the configured cost so both paths take about as long.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::LoginRequest;
use crate::backend::auth::passwords::verify_password;
use crate::backend::auth::users::get_user_by_username;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::TokenResponse;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field or malformed body
/// * `401 Unauthorized` - Unknown user or wrong password
///
/// # Example Response
///
/// ```json
/// { "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn login(
    State(app_state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(request) = payload?;
    let credentials = request.validate()?;
    tracing::info!("Login request for: {}", credentials.username);

    let user = get_user_by_username(&app_state.db_pool, &credentials.username)
        .await?
        .ok_or_else(|| {
            verify_password(&credentials.password, &app_state.unknown_user_hash);
            tracing::warn!("User not found: {}", credentials.username);
            ApiError::Unauthorized(INVALID_CREDENTIALS)
        })?;

    if !verify_password(&credentials.password, &user.password_hash) {
        tracing::warn!("Invalid password for user: {}", credentials.username);
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS));
    }

    let token = app_state.sessions.create_token(user.id)?;

    tracing::info!("User logged in successfully: {} (id {})", user.username, user.id);

    Ok(Json(TokenResponse { token }))
}
