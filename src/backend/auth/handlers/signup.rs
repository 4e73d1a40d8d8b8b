/**
 * Signup Handler
 *
 * POST /signup
 *
 * 1. Validate presence of name, username and password
 * 2. Hash password using bcrypt at the configured cost
 * 3. Insert the user; a taken username is reported as 400
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{SignupRequest, SignupResponse};
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::users::{create_user, is_unique_violation};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - Missing field, malformed body, or username taken
/// * `500 Internal Server Error` - Password hashing failed
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// { "name": "Ada", "username": "ada", "password": "correct horse" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "message": "User created successfully", "id": 1 }
/// ```
pub async fn signup(
    State(app_state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let Json(request) = payload?;
    let account = request.validate()?;
    tracing::info!("Signup request for username: {}", account.username);

    let password_hash = hash_password(&account.password, app_state.password_cost)?;

    let id = create_user(&app_state.db_pool, &account.name, &account.username, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Username already exists: {}", account.username);
                ApiError::Duplicate("Username already exists")
            } else {
                ApiError::Database(e)
            }
        })?;

    tracing::info!("User created successfully: {} (id {})", account.username, id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User created successfully".to_string(),
            id,
        }),
    ))
}
