//! Database Module
//!
//! Connection bootstrap plus the document-store access layer:
//! client, query builder, rows and per-kind repositories.

pub mod error;
pub mod query;
pub mod repository;
pub mod rows;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use query::{Param, QueryBuilder, Statement};
pub use rows::Rows;
pub use store::DocumentStore;

use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use surrealdb::opt::auth::Root;

use crate::core::Config;

/// Open the store connection described by `config`
///
/// `mem://` and `rocksdb://` open an embedded engine; `ws://`/`wss://`
/// connect to a SurrealDB server. Credentials are optional.
pub async fn connect(config: &Config) -> StoreResult<Surreal<Any>> {
    let db = any::connect(config.surreal_url.as_str()).await?;

    if let (Some(username), Some(password)) = (&config.surreal_user, &config.surreal_pass) {
        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;
    }

    db.use_ns(config.surreal_ns.as_str())
        .use_db(config.surreal_db.as_str())
        .await?;

    tracing::info!(
        url = %config.surreal_url,
        namespace = %config.surreal_ns,
        database = %config.surreal_db,
        collection = %config.collection,
        "Document store connection established"
    );

    Ok(db)
}
