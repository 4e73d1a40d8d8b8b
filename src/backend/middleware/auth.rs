/**
 * Authentication Middleware
 *
 * Guards protected routes. The token is read from the `Authorization`
 * header, either raw or with a `Bearer ` prefix, and verified statelessly:
 * no store access happens before a request is authenticated.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Extract the token from an `Authorization` header value
///
/// Returns `None` for a blank header.
pub fn token_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    let token = match value.strip_prefix("Bearer") {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim_start(),
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}

/// Authentication middleware
///
/// 1. Reads the `Authorization` header (401 "Token is missing" if absent)
/// 2. Verifies the token (401 "Invalid token" on any failure)
/// 3. Attaches `AuthenticatedUser` to request extensions
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = match request.headers().get(AUTHORIZATION) {
        Some(header) => header,
        None => {
            tracing::warn!("Missing Authorization header");
            return Err(ApiError::Unauthorized("Token is missing"));
        }
    };

    let header = header.to_str().map_err(|_| {
        tracing::warn!("Authorization header is not valid text");
        ApiError::Unauthorized("Invalid token")
    })?;

    let token = token_from_header(header).ok_or_else(|| {
        tracing::warn!("Empty Authorization header");
        ApiError::Unauthorized("Token is missing")
    })?;

    let user_id = app_state.sessions.verify_token(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        ApiError::Unauthorized("Invalid token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the user set by `auth_middleware`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized("Invalid token")
            })?;

        Ok(AuthUser(user))
    }
}
