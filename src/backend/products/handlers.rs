/**
 * Product HTTP Handlers
 *
 * Each handler performs exactly one store operation. Authentication has
 * already happened in the middleware by the time these run.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use sqlx::SqlitePool;

use super::db;
use super::db::Product;
use super::types::{ProductCreated, ProductRequest};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::shared::MessageResponse;

const PRODUCT_NOT_FOUND: &str = "Product not found";

/// POST /products
pub async fn add_product(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductCreated>), ApiError> {
    let Json(request) = payload?;
    let product = request.validate()?;

    let pid = db::create_product(&pool, &product).await?;
    tracing::info!("User {} added product {} ({})", caller.user_id, pid, product.pname);

    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            message: "Product added successfully".to_string(),
            pid,
        }),
    ))
}

/// GET /products
pub async fn get_products(State(pool): State<SqlitePool>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = db::list_products(&pool).await?;
    tracing::debug!("Listing {} products", products.len());
    Ok(Json(products))
}

/// GET /products/{pid}
pub async fn get_product(
    State(pool): State<SqlitePool>,
    pid: Result<Path<i64>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(pid) = pid?;

    db::get_product(&pool, pid)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound(PRODUCT_NOT_FOUND))
}

/// PUT /products/{pid}
///
/// All four fields are required; the product is replaced as a whole.
pub async fn update_product(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    pid: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ProductRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(pid) = pid?;
    let Json(request) = payload?;
    let product = request.validate()?;

    if db::update_product(&pool, pid, &product).await? == 0 {
        return Err(ApiError::NotFound(PRODUCT_NOT_FOUND));
    }

    tracing::info!("User {} updated product {}", caller.user_id, pid);
    Ok(Json(MessageResponse::new("Product updated successfully")))
}

/// DELETE /products/{pid}
pub async fn delete_product(
    State(pool): State<SqlitePool>,
    AuthUser(caller): AuthUser,
    pid: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(pid) = pid?;

    if db::delete_product(&pool, pid).await? == 0 {
        return Err(ApiError::NotFound(PRODUCT_NOT_FOUND));
    }

    tracing::info!("User {} deleted product {}", caller.user_id, pid);
    Ok(Json(MessageResponse::new("Product deleted successfully")))
}
