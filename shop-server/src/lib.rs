//! Shop Server - customers, products and receipts over a document store
//!
//! # Module structure
//!
//! ```text
//! shop-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── db/            # store client, query builder, rows, repositories
//! ├── orders/        # receipt aggregation and money helpers
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! └── utils/         # HTTP error type, logger
//! ```
//!
//! All three document kinds share one collection and are told apart by
//! their `type` field.

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod orders;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use db::{DocumentStore, StoreError, StoreResult};
pub use orders::ReceiptAggregator;
pub use utils::{AppError, AppResult};

// Re-export logger
pub use utils::logger::init_logger;
