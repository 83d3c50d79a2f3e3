//! Document Store Client
//!
//! Thin adapter over SurrealDB. Each call is one round trip and is tried
//! exactly once; failures come back as [`StoreError`].

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use tokio::sync::Mutex;
use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::query::{Param, QueryBuilder, Statement, ensure_ident};
use super::rows::Rows;

/// Handle on the shop collection
///
/// Cheap to clone; every clone shares the same connection and append lock.
#[derive(Clone)]
pub struct DocumentStore {
    db: Surreal<Any>,
    queries: QueryBuilder,
    /// Serializes array appends; concurrent updates of one record abort
    /// each other's optimistic transactions
    append_lock: Arc<Mutex<()>>,
}

impl DocumentStore {
    pub fn new(db: Surreal<Any>, collection: &str) -> StoreResult<Self> {
        Ok(Self {
            db,
            queries: QueryBuilder::new(collection)?,
            append_lock: Arc::new(Mutex::new(())),
        })
    }

    pub fn queries(&self) -> &QueryBuilder {
        &self.queries
    }

    pub fn collection(&self) -> &str {
        self.queries.collection()
    }

    /// Fetch a whole document, with its id as a plain string
    pub async fn get<T: DeserializeOwned>(&self, id: &str) -> StoreResult<T> {
        debug!(collection = self.collection(), id, "store get");
        let mut response = self
            .db
            .query("SELECT *, record::id(id) AS id FROM $rid")
            .bind(("rid", self.queries.record(id)))
            .await?
            .check()?;
        let rows: Vec<Value> = response.take(0)?;
        Rows::new(rows)
            .one()?
            .ok_or_else(|| StoreError::NotFound(format!("Document {id} not found")))
    }

    /// Create document `id`. Fails with `Conflict` when the id is taken.
    pub async fn insert<T: Serialize>(&self, id: &str, document: &T) -> StoreResult<()> {
        debug!(collection = self.collection(), id, "store insert");
        let mut content = serde_json::to_value(document)?;
        // The record key is the id
        if let Value::Object(fields) = &mut content {
            fields.remove("id");
        }
        self.db
            .query("CREATE $rid CONTENT $content RETURN NONE")
            .bind(("rid", self.queries.record(id)))
            .bind(("content", content))
            .await?
            .check()?;
        Ok(())
    }

    /// Append `value` to array `field` of document `id` in a single
    /// statement and return the appended value.
    ///
    /// Appends through this store (and its clones) run one at a time, so
    /// concurrent callers never abort each other. A conflicting write from
    /// another process surfaces as [`StoreError::Database`] with the array
    /// left as it was.
    pub async fn append_to_array<V: Serialize>(
        &self,
        id: &str,
        field: &str,
        value: V,
    ) -> StoreResult<V> {
        ensure_ident(field)?;
        let value_json = serde_json::to_value(&value)?;

        let _guard = self.append_lock.lock().await;
        debug!(collection = self.collection(), id, field, "store append");
        let mut response = self
            .db
            .query(format!(
                "UPDATE $rid SET {field} = array::append({field}, $value) \
                 WHERE type::is::array({field}) RETURN record::id(id) AS id"
            ))
            .bind(("rid", self.queries.record(id)))
            .bind(("value", value_json))
            .await?
            .check()?;
        let updated: Vec<Value> = response.take(0)?;
        if updated.is_empty() {
            return Err(StoreError::NotFound(format!(
                "Document {id} not found or field {field} is not an array"
            )));
        }
        Ok(value)
    }

    /// Fetch only array `field` of document `id`
    pub async fn get_array_field<T: DeserializeOwned>(
        &self,
        id: &str,
        field: &str,
    ) -> StoreResult<Vec<T>> {
        ensure_ident(field)?;
        debug!(collection = self.collection(), id, field, "store get field");
        let mut response = self
            .db
            .query(format!("SELECT VALUE {field} FROM $rid"))
            .bind(("rid", self.queries.record(id)))
            .await?
            .check()?;
        let rows: Vec<Value> = response.take(0)?;
        match rows.into_iter().next() {
            None => Err(StoreError::NotFound(format!("Document {id} not found"))),
            Some(Value::Null) => Err(StoreError::NotFound(format!(
                "Field {field} not found on document {id}"
            ))),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    /// Run a built statement and hand back its rows
    pub async fn query<T: DeserializeOwned>(&self, statement: Statement) -> StoreResult<Rows<T>> {
        let (text, params, index) = statement.into_parts();
        debug!(collection = self.collection(), params = params.len(), "store query");

        let mut query = self.db.query(text);
        for (name, param) in params {
            query = match param {
                Param::Value(value) => query.bind((name, value)),
                Param::Record(record) => query.bind((name, record)),
                Param::Records(records) => query.bind((name, records)),
            };
        }

        let mut response = query.await?.check()?;
        let rows: Vec<Value> = response.take(index)?;
        Ok(Rows::new(rows))
    }
}
