/**
 * User Model and Database Operations
 *
 * This module handles user records in the `users` table. Usernames are
 * unique at the schema level; callers detect collisions with
 * `is_unique_violation`.
 */

use chrono::NaiveDateTime;
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login name (unique)
    pub username: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: NaiveDateTime,
}

/// Partial update of a user record
///
/// `None` leaves the column untouched.
#[derive(Debug, Default, Clone)]
pub struct UserChanges {
    pub name: Option<String>,
    pub username: Option<String>,
    pub password_hash: Option<String>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `name` - Display name
/// * `username` - Login name
/// * `password_hash` - Hashed password
///
/// # Returns
/// ID of the created user
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    username: &str,
    password_hash: &str,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (name, username, password_hash)
        VALUES ($1, $2, $3)
        "#
    )
    .bind(name)
    .bind(username)
    .bind(password_hash)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, password_hash, created_at
        FROM users
        WHERE username = $1
        "#
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(
    pool: &SqlitePool,
    id: i64,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, username, password_hash, created_at
        FROM users
        WHERE id = $1
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Apply a partial update to a user
///
/// # Returns
/// Number of rows changed (0 when no user has this ID)
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    changes: &UserChanges,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE users
        SET name = COALESCE($1, name),
            username = COALESCE($2, username),
            password_hash = COALESCE($3, password_hash)
        WHERE id = $4
        "#
    )
    .bind(changes.name.as_deref())
    .bind(changes.username.as_deref())
    .bind(changes.password_hash.as_deref())
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Whether a store error is a UNIQUE constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db_err| db_err.is_unique_violation())
        .unwrap_or(false)
}
