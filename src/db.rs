//! Database access
//!
//! The routers never touch a connection directly. They build a [`Query`] and
//! hand it to a [`QueryExecutor`], which returns rows as JSON objects keyed by
//! column name. [`PgExecutor`] is the production executor backed by a
//! `deadpool-postgres` pool.

pub mod queries;
pub mod query;
mod row;
#[cfg(test)]
pub mod testutils;

pub use query::{Query, QueryBuilder};

use crate::config::DatabaseConfig;
use async_trait::async_trait;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use postgres_types::ToSql;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tokio_postgres::NoTls;
use tracing::{debug, info};

/// A single result row: column name to JSON value, in select-list order.
pub type JsonRow = serde_json::Map<String, serde_json::Value>;

/// Failures raised while talking to the data store
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    #[error("Decode error: {0}")]
    Decode(String),
}

/// Executes parameterized read queries.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Runs `query` and returns every row it produced, in order.
    async fn fetch_all(&self, query: &Query) -> Result<Vec<JsonRow>, DbError>;

    /// Checks that the data store is reachable.
    async fn ping(&self) -> Result<(), DbError>;
}

/// Runs `query` and decodes every row into `T`.
pub async fn fetch_all<T: DeserializeOwned>(
    executor: &dyn QueryExecutor,
    query: &Query,
) -> Result<Vec<T>, DbError> {
    executor
        .fetch_all(query)
        .await?
        .into_iter()
        .map(decode_row::<T>)
        .collect()
}

/// Runs `query` and decodes its first row into `T`, if there is one.
pub async fn fetch_optional<T: DeserializeOwned>(
    executor: &dyn QueryExecutor,
    query: &Query,
) -> Result<Option<T>, DbError> {
    executor
        .fetch_all(query)
        .await?
        .into_iter()
        .next()
        .map(decode_row::<T>)
        .transpose()
}

fn decode_row<T: DeserializeOwned>(row: JsonRow) -> Result<T, DbError> {
    serde_json::from_value(serde_json::Value::Object(row))
        .map_err(|e| DbError::Decode(format!("unexpected row shape: {}", e)))
}

/// Executor backed by a PostgreSQL connection pool
pub struct PgExecutor {
    pool: Pool,
}

impl PgExecutor {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryExecutor for PgExecutor {
    async fn fetch_all(&self, query: &Query) -> Result<Vec<JsonRow>, DbError> {
        let client = self.pool.get().await?;
        let statement = client.prepare_cached(query.sql()).await?;

        let params: Vec<&(dyn ToSql + Sync)> =
            query.params().iter().map(|p| p.as_sql()).collect();
        let rows = client.query(&statement, &params).await?;

        debug!("Query returned {} rows", rows.len());
        rows.iter().map(row::to_json).collect()
    }

    async fn ping(&self) -> Result<(), DbError> {
        let client = self.pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        Ok(())
    }
}

/// Create the connection pool and verify that the database answers.
pub async fn init_database_pool(config: &DatabaseConfig) -> anyhow::Result<Pool> {
    let mut cfg = Config::new();
    cfg.host = Some(config.host.clone());
    cfg.port = Some(config.port);
    cfg.user = Some(config.user.clone());
    cfg.password = Some(config.password.clone());
    cfg.dbname = Some(config.database.clone());
    cfg.manager = Some(ManagerConfig {
        recycling_method: RecyclingMethod::Fast,
    });
    cfg.pool = Some(PoolConfig::new(config.max_pool_size));

    let pool = if config.use_tls {
        let certs = rustls_native_certs::load_native_certs();
        let mut root_store = rustls::RootCertStore::empty();
        for cert in certs.certs {
            root_store.add(cert).ok();
        }

        let tls_config = rustls::ClientConfig::builder()
            .with_root_certificates(root_store)
            .with_no_client_auth();

        let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);

        cfg.create_pool(Some(Runtime::Tokio1), tls)
            .map_err(|e| anyhow::anyhow!("Failed to create TLS pool: {}", e))?
    } else {
        cfg.create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| anyhow::anyhow!("Failed to create pool: {}", e))?
    };

    let client = pool
        .get()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to get pool connection: {}", e))?;
    client
        .query_one("SELECT 1", &[])
        .await
        .map_err(|e| anyhow::anyhow!("Failed to verify database connection: {}", e))?;

    info!(
        "✅ Connected to {}:{}/{} (TLS: {}, pool size: {})",
        config.host, config.port, config.database, config.use_tls, config.max_pool_size
    );
    Ok(pool)
}
