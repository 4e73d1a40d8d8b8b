/**
 * Authentication Handler Types
 *
 * Request schemas keep every field optional so a missing key surfaces as
 * `SharedError::MissingField` from `validate()` rather than as a
 * deserialization failure.
 */

use serde::{Deserialize, Serialize};

use crate::shared::error::{require, SharedError};

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SignupRequest {
    /// Display name
    pub name: Option<String>,
    /// Login name (must be unique)
    pub username: Option<String>,
    /// Plaintext password (hashed before storage)
    pub password: Option<String>,
}

/// Validated sign up request
#[derive(Debug, PartialEq)]
pub struct NewAccount {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl SignupRequest {
    pub fn validate(self) -> Result<NewAccount, SharedError> {
        Ok(NewAccount {
            name: require(self.name, "name")?,
            username: require(self.username, "username")?,
            password: require(self.password, "password")?,
        })
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Validated login credentials
#[derive(Debug, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(self) -> Result<Credentials, SharedError> {
        Ok(Credentials {
            username: require(self.username, "username")?,
            password: require(self.password, "password")?,
        })
    }
}

/// Update user request; any subset of fields
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Validated user update; at least one field is set
#[derive(Debug, PartialEq)]
pub struct AccountChanges {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// An empty password means "keep the current one".
    pub fn validate(self) -> Result<AccountChanges, SharedError> {
        let password = self.password.filter(|p| !p.is_empty());
        if self.name.is_none() && self.username.is_none() && password.is_none() {
            return Err(SharedError::missing("name, username or password"));
        }

        Ok(AccountChanges {
            name: self.name,
            username: self.username,
            password,
        })
    }
}

/// Signup response
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SignupResponse {
    pub message: String,
    /// ID of the created user
    pub id: i64,
}
