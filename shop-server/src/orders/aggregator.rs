//! Receipt Aggregator
//!
//! Turns an order (customer id + product ids) into a stored receipt. The
//! customer and product snapshots come back from one join query; the total
//! is computed here and the finished receipt is inserted as a new document.
//!
//! Requested product ids that match no stored product are left out of the
//! receipt without failing the order.

use shared::Kind;
use shared::models::{Receipt, ReceiptDraft};
use tracing::{info, warn};

use super::money;
use crate::db::repository::ReceiptRepository;
use crate::db::{DocumentStore, StoreError, StoreResult};

#[derive(Clone)]
pub struct ReceiptAggregator {
    store: DocumentStore,
    receipts: ReceiptRepository,
}

impl ReceiptAggregator {
    pub fn new(store: DocumentStore) -> Self {
        Self {
            receipts: ReceiptRepository::new(store.clone()),
            store,
        }
    }

    /// Build, total and store a receipt; returns the new receipt's id
    pub async fn create_receipt(
        &self,
        customer_id: &str,
        product_ids: &[String],
    ) -> StoreResult<String> {
        let statement = self.store.queries().receipt_join(customer_id, product_ids);
        let draft: ReceiptDraft = self.store.query(statement).await?.one()?.ok_or_else(|| {
            StoreError::Aggregation(format!(
                "Cannot build receipt: customer {customer_id} or all of its products not found"
            ))
        })?;

        let receipt = assemble(draft);
        if receipt.products.len() < product_ids.len() {
            warn!(
                customer_id,
                requested = product_ids.len(),
                matched = receipt.products.len(),
                "Unmatched product ids dropped from receipt"
            );
        }

        let id = self.receipts.insert(&receipt).await?;
        info!(
            receipt_id = %id,
            customer_id,
            products = receipt.products.len(),
            total = receipt.total,
            "Receipt created"
        );
        Ok(id)
    }
}

/// Tag a joined row as a receipt and fix its total
pub fn assemble(draft: ReceiptDraft) -> Receipt {
    let total = money::sum_prices(draft.products.iter().map(|p| p.price));
    Receipt {
        id: None,
        kind: Kind::Receipt,
        customer: draft.customer,
        products: draft.products,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assemble_tags_and_totals_the_draft() {
        let draft: ReceiptDraft = serde_json::from_value(json!({
            "customer": { "id": "c1", "type": "customer", "firstname": "Ada", "lastname": "Byron" },
            "products": [
                { "id": "p1", "type": "product", "name": "Pen", "price": 10.0 },
                { "id": "p2", "type": "product", "name": "Ink", "price": 15.5 }
            ]
        }))
        .unwrap();

        let receipt = assemble(draft);
        assert_eq!(receipt.kind, Kind::Receipt);
        assert_eq!(receipt.id, None);
        assert_eq!(receipt.customer.id, "c1");
        assert_eq!(receipt.products.len(), 2);
        assert_eq!(receipt.total, 25.5);
    }
}
