//! Customer Repository

use shared::models::{CreditCard, Customer, CustomerCreate};

use super::BaseRepository;
use crate::db::{DocumentStore, StoreResult};

const CREDIT_CARDS: &str = "creditcards";

#[derive(Clone)]
pub struct CustomerRepository {
    base: BaseRepository,
}

impl CustomerRepository {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Find all customers
    pub async fn find_all(&self) -> StoreResult<Vec<Customer>> {
        self.base.list_by_type().await
    }

    /// Find customer by id
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Customer> {
        self.base.get_by_id(id).await
    }

    /// Create a new customer, returning its id
    pub async fn create(&self, data: CustomerCreate) -> StoreResult<String> {
        self.base.create(&Customer::from(data)).await
    }

    /// Append a card to the customer's card list
    pub async fn add_credit_card(&self, id: &str, card: CreditCard) -> StoreResult<CreditCard> {
        self.base
            .store()
            .append_to_array(id, CREDIT_CARDS, card)
            .await
    }

    /// The customer's cards, without fetching the rest of the document
    pub async fn list_credit_cards(&self, id: &str) -> StoreResult<Vec<CreditCard>> {
        self.base.store().get_array_field(id, CREDIT_CARDS).await
    }
}
