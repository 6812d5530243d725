//! In-memory executor for router tests

use super::{DbError, JsonRow, Query, QueryExecutor};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Mutex;

/// Returns the same canned rows for every query, or fails every query, and
/// records what it was asked to run.
pub struct FakeExecutor {
    rows: Option<Vec<JsonRow>>,
    queries: Mutex<Vec<Query>>,
}

impl FakeExecutor {
    /// Answers every query with `rows`, which must be a JSON array of objects.
    pub fn with_rows(rows: Value) -> Self {
        let rows = match rows {
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => map,
                    other => panic!("Fake rows must be objects, got {}", other),
                })
                .collect(),
            other => panic!("Fake rows must be an array, got {}", other),
        };
        Self {
            rows: Some(rows),
            queries: Mutex::new(vec![]),
        }
    }

    pub fn empty() -> Self {
        Self::with_rows(Value::Array(vec![]))
    }

    /// Fails every query as if the pool had been closed.
    pub fn failing() -> Self {
        Self {
            rows: None,
            queries: Mutex::new(vec![]),
        }
    }

    /// Queries received so far, oldest first.
    pub fn queries(&self) -> Vec<Query> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryExecutor for FakeExecutor {
    async fn fetch_all(&self, query: &Query) -> Result<Vec<JsonRow>, DbError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.rows {
            Some(rows) => Ok(rows.clone()),
            None => Err(DbError::Pool(deadpool_postgres::PoolError::Closed)),
        }
    }

    async fn ping(&self) -> Result<(), DbError> {
        match &self.rows {
            Some(_) => Ok(()),
            None => Err(DbError::Pool(deadpool_postgres::PoolError::Closed)),
        }
    }
}
