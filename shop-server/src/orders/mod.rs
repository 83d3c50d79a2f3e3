//! Orders
//!
//! Receipt aggregation and the money helpers it totals with.

pub mod aggregator;
pub mod money;

pub use aggregator::ReceiptAggregator;
