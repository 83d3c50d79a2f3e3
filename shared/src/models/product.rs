//! Product Model

use serde::{Deserialize, Serialize};

use super::Kind;

/// Product entity
///
/// Also used as the product snapshot embedded in receipts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub name: String,
    pub price: f64,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub price: f64,
}

impl From<ProductCreate> for Product {
    fn from(data: ProductCreate) -> Self {
        Self {
            id: None,
            kind: Kind::Product,
            name: data.name,
            price: data.price,
        }
    }
}
