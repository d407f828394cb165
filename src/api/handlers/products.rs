//! Handlers for product catalog endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::product::{ProductListQuery, ProductPayload, ProductResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a product.
///
/// # Endpoint
///
/// `POST /products`
///
/// # Errors
///
/// Returns 400 if a field constraint is violated; nothing is written.
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    payload.validate()?;

    let product = state.product_service.add(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Retrieves a product by id.
///
/// # Endpoint
///
/// `GET /products/{id}`
///
/// # Errors
///
/// Returns 404 if the id is unknown.
pub async fn find_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<ProductResponse>, AppError> {
    let product = state.product_service.find_by_id(id).await?;

    Ok(Json(product.into()))
}

/// Lists products, optionally filtered by a name fragment.
///
/// # Endpoint
///
/// `GET /products` or `GET /products?name=pen`
pub async fn list_products_handler(
    Query(query): Query<ProductListQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = match query.name {
        Some(fragment) => {
            state
                .product_service
                .find_by_name_containing(&fragment)
                .await?
        }
        None => state.product_service.find_all().await?,
    };

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

/// Replaces the fields of a product.
///
/// # Endpoint
///
/// `PUT /products/{id}`
///
/// # Errors
///
/// Returns 400 if a field constraint is violated.
/// Returns 404 if the id is unknown.
pub async fn update_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<ProductResponse>, AppError> {
    payload.validate()?;

    let product = state.product_service.update(id, payload.into()).await?;

    Ok(Json(product.into()))
}

/// Deletes a product.
///
/// # Endpoint
///
/// `DELETE /products/{id}`
///
/// # Errors
///
/// Returns 404 if the id is unknown.
pub async fn delete_product_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.product_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
