//! Repository Module
//!
//! Typed access to the shop collection. Every document lives in the same
//! table; repositories scan it by `type` tag and decode rows into the
//! matching model, rejecting documents whose tag disagrees.

pub mod customer;
pub mod product;
pub mod receipt;

// Re-exports
pub use customer::CustomerRepository;
pub use product::ProductRepository;
pub use receipt::ReceiptRepository;

use serde_json::Value;
use shared::Entity;
use shared::util::new_id;

use super::{DocumentStore, StoreError, StoreResult};

/// Base repository with store reference
#[derive(Clone)]
pub struct BaseRepository {
    store: DocumentStore,
}

impl BaseRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    /// All documents tagged `T::KIND`
    pub async fn list_by_type<T: Entity>(&self) -> StoreResult<Vec<T>> {
        let statement = self.store.queries().type_scan(T::KIND);
        self.store
            .query::<Value>(statement)
            .await?
            .map(|row| row.and_then(|value| T::decode(value).map_err(StoreError::from)))
            .collect()
    }

    /// Document `id`, which must be tagged `T::KIND`
    pub async fn get_by_id<T: Entity>(&self, id: &str) -> StoreResult<T> {
        let value: Value = self.store.get(id).await?;
        Ok(T::decode(value)?)
    }

    /// Insert `entity` under a fresh id and return the id.
    ///
    /// The stored copy carries the `T::KIND` tag and no `id` field; the
    /// caller's value is left as it was.
    pub async fn create<T: Entity>(&self, entity: &T) -> StoreResult<String> {
        let mut document = serde_json::to_value(entity)?;
        if let Value::Object(fields) = &mut document {
            fields.remove("id");
            fields.insert("type".to_string(), Value::from(T::KIND.as_str()));
        }

        let id = new_id();
        self.store.insert(&id, &document).await?;
        tracing::debug!(kind = %T::KIND, id = %id, "Document created");
        Ok(id)
    }
}
