use crate::core::{Config, Result};
use crate::db::repository::{CustomerRepository, ProductRepository, ReceiptRepository};
use crate::db::{self, DocumentStore};
use crate::orders::ReceiptAggregator;

/// Server state shared by every request handler
///
/// Built once at startup around a single store connection. Cloning is cheap
/// and every clone talks to the same connection; nothing in here is mutated
/// after construction.
#[derive(Clone)]
pub struct ServerState {
    pub store: DocumentStore,
    pub customers: CustomerRepository,
    pub products: ProductRepository,
    pub receipts: ReceiptRepository,
    pub aggregator: ReceiptAggregator,
}

impl ServerState {
    /// Wire repositories and the aggregator to `store`
    pub fn new(store: DocumentStore) -> Self {
        Self {
            customers: CustomerRepository::new(store.clone()),
            products: ProductRepository::new(store.clone()),
            receipts: ReceiptRepository::new(store.clone()),
            aggregator: ReceiptAggregator::new(store.clone()),
            store,
        }
    }

    /// Connect to the store described by `config` and build the state
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = db::connect(config).await?;
        let store = DocumentStore::new(db, &config.collection)?;
        Ok(Self::new(store))
    }
}
