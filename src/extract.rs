use async_trait::async_trait;
use axum::{
    extract::{FromRequest, FromRequestParts, Path},
    http::request::Parts,
};

use crate::error::AppError;

/// `axum::Json` whose rejections become `{"message": ...}` responses: 400 for
/// bad JSON, the body error's own status (e.g. 413) otherwise.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Numeric `{id}` path segment.
pub struct StockId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for StockId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state).await?;
        parse_id(&raw).map(StockId)
    }
}

fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::Validation(format!("invalid stock id: {raw:?}")))
}
