use std::sync::Arc;

use crate::store::StockStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StockStore>,
}

impl AppState {
    pub fn new(store: impl StockStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}
