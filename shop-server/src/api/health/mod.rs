//! Root liveness endpoint

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(root))
}

/// GET / - plain-text greeting
async fn root() -> &'static str {
    "Hello World"
}
