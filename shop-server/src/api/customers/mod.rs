//! Customer API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/customers", get(handler::list))
        .route("/customer", post(handler::create))
        .route("/customer/{id}", get(handler::get_by_id))
        .route("/customer/orders/{id}", get(handler::list_orders))
        .route(
            "/customer/creditcard/{id}",
            get(handler::list_credit_cards).put(handler::add_credit_card),
        )
}
