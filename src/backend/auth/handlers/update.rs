/**
 * Update User Handler
 *
 * PUT /users/{id}
 *
 * Any authenticated caller may update any account; there are no per-user
 * permissions. Fields left out of the body keep their stored values, and a
 * new password is re-hashed before it reaches the store.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::Json,
};

use crate::backend::auth::handlers::types::UpdateUserRequest;
use crate::backend::auth::passwords::hash_password;
use crate::backend::auth::users::{is_unique_violation, update_user as store_update_user, UserChanges};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::MessageResponse;

/// Update user handler
///
/// # Errors
///
/// * `400 Bad Request` - No field given, malformed body, or username taken
/// * `401 Unauthorized` - Missing or invalid token (from the middleware)
/// * `404 Not Found` - No user with this ID
pub async fn update_user(
    State(app_state): State<AppState>,
    AuthUser(caller): AuthUser,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let changes = request.validate()?;
    tracing::info!("User {} updating user {}", caller.user_id, id);

    let password_hash = changes
        .password
        .as_deref()
        .map(|password| hash_password(password, app_state.password_cost))
        .transpose()?;

    let changes = UserChanges {
        name: changes.name,
        username: changes.username,
        password_hash,
    };

    let updated = store_update_user(&app_state.db_pool, id, &changes)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Duplicate("Username already exists")
            } else {
                ApiError::Database(e)
            }
        })?;

    if updated == 0 {
        tracing::warn!("User not found: {}", id);
        return Err(ApiError::NotFound("User not found"));
    }

    Ok(Json(MessageResponse::new("User updated successfully")))
}
