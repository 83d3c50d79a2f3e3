//! Product API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CreatedId, Product, ProductCreate};

/// GET /products - list all products
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.find_all().await?;
    Ok(Json(products))
}

/// POST /product - create a product
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<ProductCreate>, JsonRejection>,
) -> AppResult<Json<CreatedId>> {
    let Json(payload) = payload?;
    let id = state.products.create(payload).await?;
    Ok(Json(CreatedId { id }))
}
