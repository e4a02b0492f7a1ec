mod stocks;

pub use stocks::*;

pub async fn health() -> &'static str {
    "OK"
}

pub async fn not_found() -> crate::error::AppError {
    crate::error::AppError::RouteNotFound
}
