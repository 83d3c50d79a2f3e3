//! Query Builder
//!
//! Assembles the SurrealQL statements run against the shop collection.
//! Anything that comes from a request travels as a bound parameter; only
//! the collection name, kind tags and field names are written into the text,
//! and names are checked to be plain identifiers first.

use std::sync::Arc;

use serde_json::Value;
use shared::Kind;
use surrealdb::RecordId;

use super::error::{StoreError, StoreResult};

/// Value bound to a named statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Param {
    Value(Value),
    Record(RecordId),
    Records(Vec<RecordId>),
}

/// Statement text plus its bound parameters
#[derive(Debug, Clone)]
pub struct Statement {
    text: String,
    params: Vec<(String, Param)>,
    /// Index of the statement whose rows are returned
    result_index: usize,
}

impl Statement {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            params: Vec::new(),
            result_index: 0,
        }
    }

    pub fn bind(mut self, name: impl Into<String>, param: Param) -> Self {
        self.params.push((name.into(), param));
        self
    }

    /// Return rows of the `index`-th statement instead of the first
    pub fn result_at(mut self, index: usize) -> Self {
        self.result_index = index;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn params(&self) -> &[(String, Param)] {
        &self.params
    }

    pub fn result_index(&self) -> usize {
        self.result_index
    }

    pub fn into_parts(self) -> (String, Vec<(String, Param)>, usize) {
        (self.text, self.params, self.result_index)
    }
}

/// Check that `name` can be written into a statement as a bare identifier
pub fn ensure_ident(name: &str) -> StoreResult<()> {
    let mut chars = name.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::Query(format!("Invalid identifier: {name:?}")))
    }
}

/// Builds statements for one collection
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    collection: Arc<str>,
}

impl QueryBuilder {
    pub fn new(collection: &str) -> StoreResult<Self> {
        ensure_ident(collection)?;
        Ok(Self {
            collection: Arc::from(collection),
        })
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    /// Record id of document `id` in this collection
    pub fn record(&self, id: &str) -> RecordId {
        RecordId::from_table_key(self.collection.as_ref(), id.to_owned())
    }

    /// Every field plus the string id of each document tagged `kind`
    pub fn type_scan(&self, kind: Kind) -> Statement {
        Statement::new(format!(
            "SELECT *, record::id(id) AS id FROM {} WHERE type = '{}'",
            self.collection,
            kind.as_str()
        ))
    }

    /// Receipts whose customer snapshot points at `customer_id`
    pub fn receipts_for_customer(&self, customer_id: &str) -> Statement {
        Statement::new(format!(
            "SELECT *, record::id(id) AS id FROM {} WHERE type = '{}' AND customer.id = $customer_id",
            self.collection,
            Kind::Receipt.as_str()
        ))
        .bind("customer_id", Param::Value(Value::String(customer_id.to_owned())))
    }

    /// Single round trip producing `{ customer, products }` for a new receipt.
    ///
    /// Products are key lookups, so ids with no stored product simply yield
    /// nothing. The select returns no row when the customer does not exist
    /// or when none of the products do.
    pub fn receipt_join(&self, customer_id: &str, product_ids: &[String]) -> Statement {
        let products: Vec<RecordId> = product_ids.iter().map(|id| self.record(id)).collect();

        Statement::new(format!(
            r#"
            LET $products = (
                SELECT record::id(id) AS id, name, price, type
                FROM $product_ids
                WHERE type = '{product}'
            );
            SELECT
                {{
                    id: record::id(id),
                    firstname: firstname,
                    lastname: lastname,
                    type: type
                }} AS customer,
                $products AS products
            FROM $customer_id
            WHERE type = '{customer}' AND array::len($products) > 0;
            "#,
            product = Kind::Product.as_str(),
            customer = Kind::Customer.as_str(),
        ))
        .bind("customer_id", Param::Record(self.record(customer_id)))
        .bind("product_ids", Param::Records(products))
        .result_at(1)
    }
}
