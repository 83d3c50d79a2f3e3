//! Receipt Model
//!
//! A receipt freezes the customer and products as they were when it was
//! created. It is never updated afterwards.

use serde::{Deserialize, Serialize};

use super::{CustomerSnapshot, Kind, Product};

/// Receipt entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub customer: CustomerSnapshot,
    pub products: Vec<Product>,
    /// Sum of `products[].price` at creation time
    pub total: f64,
}

/// Row produced by the receipt join, before tagging and totalling
#[derive(Debug, Clone, Deserialize)]
pub struct ReceiptDraft {
    pub customer: CustomerSnapshot,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Reference to another document by id; other fields are ignored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: String,
}

/// Create order payload
///
/// Shaped like a receipt, but only `customer.id` and `products[].id` are read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer: EntityRef,
    #[serde(default)]
    pub products: Vec<EntityRef>,
}

impl OrderCreate {
    pub fn product_ids(&self) -> Vec<String> {
        self.products.iter().map(|p| p.id.clone()).collect()
    }
}
