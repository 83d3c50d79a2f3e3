//! Data models
//!
//! All documents share one collection; the `type` field says which model a
//! document decodes into. IDs are opaque strings (the record key).

pub mod customer;
pub mod document;
pub mod product;
pub mod receipt;

// Re-exports
pub use customer::{CreditCard, Customer, CustomerCreate, CustomerSnapshot};
pub use document::{DecodeError, Document, Entity, Kind};
pub use product::{Product, ProductCreate};
pub use receipt::{EntityRef, OrderCreate, Receipt, ReceiptDraft};

/// Response body for endpoints that create a document
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreatedId {
    pub id: String,
}
