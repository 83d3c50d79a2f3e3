//! Store error types

use shared::DecodeError;
use thiserror::Error;

/// Document store error types
///
/// Every failure of the store layer keeps its kind here, even though the
/// HTTP boundary reports them all the same way.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Document id, or a field on it, does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Insert hit an id that already exists
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Malformed statement or failure while executing it
    #[error("Query error: {0}")]
    Query(String),

    /// Transport, connection or store invariant fault
    #[error("Database error: {0}")]
    Database(String),

    /// Receipt join matched nothing to build a receipt from
    #[error("Aggregation error: {0}")]
    Aggregation(String),
}

impl StoreError {
    /// Short label for the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "not_found",
            StoreError::Conflict(_) => "conflict",
            StoreError::Query(_) => "query",
            StoreError::Database(_) => "database",
            StoreError::Aggregation(_) => "aggregation",
        }
    }
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        use surrealdb::error::{Api, Db};

        let message = err.to_string();
        match err {
            surrealdb::Error::Db(Db::RecordExists { .. } | Db::TxKeyAlreadyExists) => {
                StoreError::Conflict(message)
            }
            surrealdb::Error::Db(db) if is_statement_error(&db) => StoreError::Query(message),
            surrealdb::Error::Db(_) => StoreError::Database(message),
            // Remote engines only hand back the server's text
            surrealdb::Error::Api(Api::Query(_)) if message.contains("already exists") => {
                StoreError::Conflict(message)
            }
            surrealdb::Error::Api(Api::Query(_)) if is_transaction_failure(&message) => {
                StoreError::Database(message)
            }
            surrealdb::Error::Api(Api::Query(_)) => StoreError::Query(message),
            _ => StoreError::Database(message),
        }
    }
}

/// Faults in the statement itself: parsing, arguments, evaluation
fn is_statement_error(err: &surrealdb::error::Db) -> bool {
    use surrealdb::error::Db;

    matches!(
        err,
        Db::InvalidQuery(_)
            | Db::QueryEmpty
            | Db::QueryRemaining
            | Db::InvalidContent { .. }
            | Db::InvalidMerge { .. }
            | Db::InvalidPatch { .. }
            | Db::InvalidParam { .. }
            | Db::InvalidField { .. }
            | Db::InvalidSplit { .. }
            | Db::InvalidOrder { .. }
            | Db::InvalidGroup { .. }
            | Db::InvalidLimit { .. }
            | Db::InvalidStart { .. }
            | Db::InvalidFunction { .. }
            | Db::InvalidArguments { .. }
            | Db::InvalidAggregation { .. }
            | Db::InvalidStatementTarget { .. }
            | Db::IdInvalid { .. }
            | Db::CoerceTo { .. }
            | Db::ConvertTo { .. }
            | Db::FieldCheck { .. }
            | Db::FieldValue { .. }
            | Db::ComputationDepthExceeded
            | Db::SingleOnlyOutput
            | Db::Thrown(_)
    )
}

/// Server text of a transaction that aborted or failed to commit
fn is_transaction_failure(message: &str) -> bool {
    message.contains("failed transaction") || message.contains("read or write conflict")
}

impl From<DecodeError> for StoreError {
    fn from(err: DecodeError) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Database(format!("Failed to decode document: {err}"))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
