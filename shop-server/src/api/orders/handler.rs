//! Order API Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CreatedId, OrderCreate};

/// POST /order - turn an order into a stored receipt
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> AppResult<Json<CreatedId>> {
    let Json(order) = payload?;
    let id = state
        .aggregator
        .create_receipt(&order.customer.id, &order.product_ids())
        .await?;
    Ok(Json(CreatedId { id }))
}
