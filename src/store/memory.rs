use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{StockStore, StoreError};
use crate::models::{NewStock, Stock};

#[derive(Default)]
pub struct MemoryStockStore {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    next_id: i64,
    rows: BTreeMap<i64, Stock>,
}

#[async_trait]
impl StockStore for MemoryStockStore {
    async fn insert(&self, stock: &NewStock) -> Result<i64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rows.insert(id, stock.clone().into_stock(id));
        Ok(id)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Stock>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Stock>, StoreError> {
        Ok(self.inner.lock().unwrap().rows.values().cloned().collect())
    }

    async fn update(&self, id: i64, stock: &NewStock) -> Result<u64, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.rows.get_mut(&id) {
            Some(row) => {
                *row = stock.clone().into_stock(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        Ok(u64::from(self.inner.lock().unwrap().rows.remove(&id).is_some()))
    }
}

/// Fails every call the way an unreachable database would.
pub struct UnavailableStockStore;

#[async_trait]
impl StockStore for UnavailableStockStore {
    async fn insert(&self, _stock: &NewStock) -> Result<i64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_by_id(&self, _id: i64) -> Result<Option<Stock>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn get_all(&self) -> Result<Vec<Stock>, StoreError> {
        Err(StoreError::Timeout(Duration::from_secs(5)))
    }

    async fn update(&self, _id: i64, _stock: &NewStock) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn delete(&self, _id: i64) -> Result<u64, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}
