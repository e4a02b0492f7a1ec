//! Persistence gateway for stock records.
//!
//! Handlers only see the [`StockStore`] trait. [`PgStockStore`] is the
//! production implementation; the in-memory store backs the router tests.

mod postgres;

#[cfg(test)]
pub(crate) mod memory;

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewStock, Stock};

pub use postgres::PgStockStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("database call timed out after {0:?}")]
    Timeout(Duration),
}

/// The five fixed operations on the `stocks` table.
///
/// A missing row is never an error: `get_by_id` returns `None` and the write
/// operations report an affected count of zero.
#[async_trait]
pub trait StockStore: Send + Sync {
    /// Inserts a row and returns its generated id.
    async fn insert(&self, stock: &NewStock) -> Result<i64, StoreError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Stock>, StoreError>;

    /// All rows ordered by id.
    async fn get_all(&self) -> Result<Vec<Stock>, StoreError>;

    /// Overwrites the mutable fields of row `id`. Never inserts.
    async fn update(&self, id: i64, stock: &NewStock) -> Result<u64, StoreError>;

    async fn delete(&self, id: i64) -> Result<u64, StoreError>;
}
