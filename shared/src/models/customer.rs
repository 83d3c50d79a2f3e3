//! Customer Model

use serde::{Deserialize, Serialize};

use super::Kind;

/// Credit card, owned by the customer's `creditcards` array
///
/// Cards have no identity of their own and duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCard {
    pub brand: String,
    pub number: String,
    pub expiration: String,
}

/// Customer entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub creditcards: Vec<CreditCard>,
}

/// Create customer payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub firstname: String,
    pub lastname: String,
    #[serde(default)]
    pub creditcards: Vec<CreditCard>,
}

impl From<CustomerCreate> for Customer {
    fn from(data: CustomerCreate) -> Self {
        Self {
            id: None,
            kind: Kind::Customer,
            firstname: data.firstname,
            lastname: data.lastname,
            creditcards: data.creditcards,
        }
    }
}

/// Customer as frozen into a receipt (no credit cards)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: Kind,
    pub firstname: String,
    pub lastname: String,
}
