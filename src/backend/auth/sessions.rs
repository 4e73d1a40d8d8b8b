/**
 * Session Tokens
 *
 * Stateless HS256 JWTs carrying the user id and an expiry. Nothing is
 * persisted: a token is valid for exactly as long as its signature checks
 * out and its `exp` lies in the future, and it cannot be revoked early.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 10;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    /// User ID
    pub id: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// Single outcome for every rejected token
///
/// Bad structure, bad signature and expiry are deliberately
/// indistinguishable to callers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid token")]
pub struct InvalidToken;

/// Signing keys and validation rules, built once at startup
#[derive(Clone)]
pub struct SessionKeys {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl SessionKeys {
    /// Build keys from the server secret
    ///
    /// # Arguments
    /// * `secret` - Shared HMAC secret
    /// * `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Lifetime of issued tokens
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Create a token for a user, valid from now
    pub fn create_token(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.create_token_at(user_id, Utc::now())
    }

    /// Create a token as if issued at `issued_at`
    pub fn create_token_at(
        &self,
        user_id: i64,
        issued_at: DateTime<Utc>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let claims = Claims {
            id: user_id,
            exp: (issued_at + self.ttl).timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
    }

    /// Verify a token and return the user ID it was issued for
    pub fn verify_token(&self, token: &str) -> Result<i64, InvalidToken> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims.id)
            .map_err(|e| {
                tracing::debug!("Token rejected: {:?}", e.kind());
                InvalidToken
            })
    }
}

impl fmt::Debug for SessionKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionKeys")
            .field("algorithm", &Algorithm::HS256)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
