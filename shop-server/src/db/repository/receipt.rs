//! Receipt Repository
//!
//! Read access plus the single insert made by the receipt aggregator.
//! Receipts are never updated.

use serde_json::Value;
use shared::Entity;
use shared::models::Receipt;

use super::BaseRepository;
use crate::db::{DocumentStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct ReceiptRepository {
    base: BaseRepository,
}

impl ReceiptRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all receipts
    pub async fn find_all(&self) -> StoreResult<Vec<Receipt>> {
        self.base.list_by_type().await
    }

    /// Find receipt by id
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Receipt> {
        self.base.get_by_id(id).await
    }

    /// Receipts issued to `customer_id`
    pub async fn find_by_customer(&self, customer_id: &str) -> StoreResult<Vec<Receipt>> {
        let store = self.base.store();
        store
            .query::<Value>(store.queries().receipts_for_customer(customer_id))
            .await?
            .map(|row| row.and_then(|value| Receipt::decode(value).map_err(StoreError::from)))
            .collect()
    }

    /// Store a completed receipt, returning its id
    pub async fn insert(&self, receipt: &Receipt) -> StoreResult<String> {
        self.base.create(receipt).await
    }
}
