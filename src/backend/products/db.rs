/**
 * Database Operations for Products
 *
 * Price and stock must be non-negative; the `products` table enforces this
 * with CHECK constraints, so violations come back as store errors.
 */

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Product as stored and as returned to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub pid: i64,
    pub pname: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

/// Product fields supplied by a client
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub pname: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
}

/// Insert a product
///
/// # Returns
/// The generated `pid`
pub async fn create_product(pool: &SqlitePool, product: &NewProduct) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO products (pname, description, price, stock)
        VALUES ($1, $2, $3, $4)
        "#
    )
    .bind(&product.pname)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load every product, ordered by `pid`
pub async fn list_products(pool: &SqlitePool) -> Result<Vec<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT pid, pname, description, price, stock
        FROM products
        ORDER BY pid
        "#
    )
    .fetch_all(pool)
    .await
}

/// Load a single product
pub async fn get_product(pool: &SqlitePool, pid: i64) -> Result<Option<Product>, sqlx::Error> {
    sqlx::query_as::<_, Product>(
        r#"
        SELECT pid, pname, description, price, stock
        FROM products
        WHERE pid = $1
        "#
    )
    .bind(pid)
    .fetch_optional(pool)
    .await
}

/// Replace all fields of a product
///
/// # Returns
/// Number of rows changed (0 when no product has this `pid`)
pub async fn update_product(
    pool: &SqlitePool,
    pid: i64,
    product: &NewProduct,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE products
        SET pname = $1, description = $2, price = $3, stock = $4
        WHERE pid = $5
        "#
    )
    .bind(&product.pname)
    .bind(&product.description)
    .bind(product.price)
    .bind(product.stock)
    .bind(pid)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a product
///
/// # Returns
/// Number of rows removed (0 when no product has this `pid`)
pub async fn delete_product(pool: &SqlitePool, pid: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM products WHERE pid = $1")
        .bind(pid)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
