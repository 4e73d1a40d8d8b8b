//! Database migration tests
//!
//! Migrations must apply cleanly to a fresh database and be safe to run
//! again on an existing one.

use storefront::backend::server::config::load_database;
use tempfile::TempDir;

use crate::common::{config_with_url, test_config};

#[tokio::test]
async fn test_migrations_run_successfully() {
    let pool = load_database(&test_config()).await;
    assert!(pool.is_ok(), "Migrations should run successfully");
}

#[tokio::test]
async fn test_users_table_exists() {
    let pool = load_database(&test_config()).await.unwrap();

    let result = sqlx::query("SELECT id, name, username, password_hash, created_at FROM users LIMIT 1")
        .execute(&pool)
        .await;

    assert!(result.is_ok(), "Users table should exist");
}

#[tokio::test]
async fn test_products_table_exists() {
    let pool = load_database(&test_config()).await.unwrap();

    let result = sqlx::query("SELECT pid, pname, description, price, stock FROM products LIMIT 1")
        .execute(&pool)
        .await;

    assert!(result.is_ok(), "Products table should exist");
}

#[tokio::test]
async fn test_file_database_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", dir.path().join("shop.db").display());
    let config = config_with_url(&url);

    let pool = load_database(&config).await.unwrap();
    sqlx::query("INSERT INTO products (pname, description, price, stock) VALUES ('Widget', 'd', 1.0, 1)")
        .execute(&pool)
        .await
        .unwrap();
    pool.close().await;

    let reopened = load_database(&config).await.unwrap();
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&reopened)
        .await
        .unwrap();
    assert_eq!(count, 1);
}
