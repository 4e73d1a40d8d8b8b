/**
 * Server Configuration
 *
 * Configuration is read from environment variables (a `.env` file is
 * loaded by the binary first), and the SQLite pool is opened and migrated
 * here.
 *
 * # Variables
 *
 * | Variable             | Default                  |
 * |----------------------|--------------------------|
 * | `DATABASE_URL`       | `sqlite://<DB_NAME>.db`  |
 * | `DB_NAME`            | `storefront`             |
 * | `DB_HOST`, `DB_USER` | unset, informational     |
 * | `JWT_SECRET`         | required                 |
 * | `TOKEN_TTL_MINUTES`  | `10`                     |
 * | `BCRYPT_COST`        | `12`                     |
 * | `SERVER_PORT`        | `3000`                   |
 * | `DB_MAX_CONNECTIONS` | `5`                      |
 */

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_MINUTES;

const DEFAULT_DB_NAME: &str = "storefront";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Everything the server needs at startup
#[derive(Clone)]
pub struct ServerConfig {
    /// sqlx SQLite connection URL
    pub database_url: String,
    /// Carried over from MySQL-style deployments; not used by SQLite
    pub db_host: Option<String>,
    /// Carried over from MySQL-style deployments; not used by SQLite
    pub db_user: Option<String>,
    /// HMAC secret for session tokens
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub bcrypt_cost: u32,
    pub port: u16,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database_url = get("DATABASE_URL").unwrap_or_else(|| {
            let name = get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string());
            format!("sqlite://{}.db", name)
        });

        let jwt_secret = get("JWT_SECRET").ok_or(ConfigError::MissingValue("JWT_SECRET"))?;

        let ttl_minutes: i64 = parse_or(get("TOKEN_TTL_MINUTES"), "TOKEN_TTL_MINUTES", DEFAULT_TOKEN_TTL_MINUTES)?;
        if ttl_minutes <= 0 {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_MINUTES",
                value: ttl_minutes.to_string(),
            });
        }

        let bcrypt_cost: u32 = parse_or(get("BCRYPT_COST"), "BCRYPT_COST", bcrypt::DEFAULT_COST)?;
        if !(4..=31).contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        Ok(Self {
            database_url,
            db_host: get("DB_HOST"),
            db_user: get("DB_USER"),
            jwt_secret,
            token_ttl: Duration::minutes(ttl_minutes),
            bcrypt_cost,
            port: parse_or(get("SERVER_PORT"), "SERVER_PORT", DEFAULT_PORT)?,
            max_connections: parse_or(get("DB_MAX_CONNECTIONS"), "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
        })
    }
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &self.database_url)
            .field("db_host", &self.db_host)
            .field("db_user", &self.db_user)
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("port", &self.port)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &'static str, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

/// Open the connection pool and run migrations
///
/// In-memory databases exist per connection, so they get a single
/// connection that is never recycled.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    if config.db_host.is_some() || config.db_user.is_some() {
        tracing::info!(
            db_host = ?config.db_host,
            db_user = ?config.db_user,
            "DB_HOST/DB_USER are set but ignored by the SQLite store"
        );
    }

    tracing::info!("Connecting to database {}", config.database_url);

    let connect_options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = if config.database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(connect_options)
            .await?
    } else {
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(connect_options)
            .await?
    };

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Migrated in-memory pool for unit tests
#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let config = ServerConfig::from_lookup(|key| match key {
        "DATABASE_URL" => Some("sqlite::memory:".to_string()),
        "JWT_SECRET" => Some("unit-test-secret".to_string()),
        _ => None,
    })
    .expect("test config");

    load_database(&config).await.expect("in-memory database")
}
