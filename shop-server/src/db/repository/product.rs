//! Product Repository

use shared::models::{Product, ProductCreate};

use super::BaseRepository;
use crate::db::{DocumentStore, StoreResult};

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
}

impl ProductRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all products
    pub async fn find_all(&self) -> StoreResult<Vec<Product>> {
        self.base.list_by_type().await
    }

    /// Find product by id
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Product> {
        self.base.get_by_id(id).await
    }

    /// Create a new product, returning its id
    pub async fn create(&self, data: ProductCreate) -> StoreResult<String> {
        self.base.create(&Product::from(data)).await
    }
}
