//! Customer API Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

use crate::core::ServerState;
use crate::utils::AppResult;
use shared::models::{CreatedId, CreditCard, Customer, CustomerCreate, Receipt};

/// GET /customers - list all customers
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = state.customers.find_all().await?;
    Ok(Json(customers))
}

/// POST /customer - create a customer
pub async fn create(
    State(state): State<ServerState>,
    payload: Result<Json<CustomerCreate>, JsonRejection>,
) -> AppResult<Json<CreatedId>> {
    let Json(payload) = payload?;
    let id = state.customers.create(payload).await?;
    Ok(Json(CreatedId { id }))
}

/// GET /customer/{id} - fetch one customer
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Customer>> {
    let mut customer = state.customers.find_by_id(&id).await?;
    customer.id = Some(id);
    Ok(Json(customer))
}

/// GET /customer/orders/{id} - receipts issued to a customer
pub async fn list_orders(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Receipt>>> {
    let receipts = state.receipts.find_by_customer(&id).await?;
    Ok(Json(receipts))
}

/// PUT /customer/creditcard/{id} - append a credit card
pub async fn add_credit_card(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    payload: Result<Json<CreditCard>, JsonRejection>,
) -> AppResult<Json<CreditCard>> {
    let Json(card) = payload?;
    let card = state.customers.add_credit_card(&id, card).await?;
    Ok(Json(card))
}

/// GET /customer/creditcard/{id} - a customer's credit cards
pub async fn list_credit_cards(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<CreditCard>>> {
    let cards = state.customers.list_credit_cards(&id).await?;
    Ok(Json(cards))
}
