use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StockStore, StoreError};
use crate::models::{NewStock, Stock};

/// `StockStore` over a shared Postgres pool. Every call checks out a single
/// connection for the duration of one statement.
#[derive(Clone)]
pub struct PgStockStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl PgStockStore {
    pub fn new(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    async fn bounded<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        tokio::time::timeout(self.query_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.query_timeout))?
            .map_err(StoreError::from)
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn insert(&self, stock: &NewStock) -> Result<i64, StoreError> {
        let id: i64 = self
            .bounded(
                sqlx::query_scalar(
                    "INSERT INTO stocks (name, price, company) VALUES ($1, $2, $3) RETURNING stockid",
                )
                .bind(&stock.name)
                .bind(stock.price)
                .bind(&stock.company)
                .fetch_one(&self.pool),
            )
            .await?;

        tracing::debug!(id, "inserted stock");
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Stock>, StoreError> {
        self.bounded(
            sqlx::query_as::<_, Stock>(
                "SELECT stockid AS id, name, price, company FROM stocks WHERE stockid = $1",
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    async fn get_all(&self) -> Result<Vec<Stock>, StoreError> {
        self.bounded(
            sqlx::query_as::<_, Stock>(
                "SELECT stockid AS id, name, price, company FROM stocks ORDER BY stockid",
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    async fn update(&self, id: i64, stock: &NewStock) -> Result<u64, StoreError> {
        let result = self
            .bounded(
                sqlx::query("UPDATE stocks SET name = $2, price = $3, company = $4 WHERE stockid = $1")
                    .bind(id)
                    .bind(&stock.name)
                    .bind(stock.price)
                    .bind(&stock.company)
                    .execute(&self.pool),
            )
            .await?;

        let affected = result.rows_affected();
        tracing::debug!(id, affected, "updated stock");
        Ok(affected)
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let result = self
            .bounded(
                sqlx::query("DELETE FROM stocks WHERE stockid = $1")
                    .bind(id)
                    .execute(&self.pool),
            )
            .await?;

        let affected = result.rows_affected();
        tracing::debug!(id, affected, "deleted stock");
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use tokio::net::TcpListener;

    #[tokio::test]
    async fn unresponsive_database_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let pool = PgPoolOptions::new()
            .connect_lazy(&format!("postgres://stocks:stocks@{addr}/stocks"))
            .unwrap();
        let store = PgStockStore::new(pool, Duration::from_millis(200));

        let err = store.get_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Timeout(_)), "{err}");

        let err = store.delete(1).await.unwrap_err();
        assert!(matches!(err, StoreError::Timeout(_)), "{err}");
    }
}
