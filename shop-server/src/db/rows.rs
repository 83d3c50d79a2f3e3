//! Query result rows

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::{StoreError, StoreResult};

/// One-pass sequence of rows, decoded into `T` as they are pulled.
///
/// Not restartable: once a row has been yielded it is gone.
#[derive(Debug)]
pub struct Rows<T> {
    inner: std::vec::IntoIter<Value>,
    _row: PhantomData<fn() -> T>,
}

impl<T> Rows<T> {
    pub(crate) fn new(rows: Vec<Value>) -> Self {
        Self {
            inner: rows.into_iter(),
            _row: PhantomData,
        }
    }

    /// Rows not yet consumed
    pub fn remaining(&self) -> usize {
        self.inner.len()
    }
}

impl<T: DeserializeOwned> Rows<T> {
    /// At most one row is expected. More than one is a store invariant
    /// violation.
    pub fn one(mut self) -> StoreResult<Option<T>> {
        match self.remaining() {
            0 => Ok(None),
            1 => self.next().transpose(),
            n => Err(StoreError::Database(format!(
                "Expected a single row, query returned {n}"
            ))),
        }
    }
}

impl<T: DeserializeOwned> Iterator for Rows<T> {
    type Item = StoreResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|row| serde_json::from_value(row).map_err(StoreError::from))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
