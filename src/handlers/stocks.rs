use axum::{extract::State, http::StatusCode, Json};

use crate::{
    error::AppError,
    extract::{ApiJson, StockId},
    models::{NewStock, Stock, StockResponse},
    state::AppState,
};

pub async fn create_stock(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<NewStock>,
) -> Result<(StatusCode, Json<StockResponse>), AppError> {
    req.validate().map_err(AppError::Validation)?;

    let id = state.store.insert(&req).await?;
    tracing::info!(id, name = %req.name, "stock created");

    Ok((
        StatusCode::CREATED,
        Json(StockResponse {
            id,
            message: "Stock created successfully".into(),
        }),
    ))
}

pub async fn get_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
) -> Result<Json<Stock>, AppError> {
    state
        .store
        .get_by_id(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

pub async fn get_stocks(State(state): State<AppState>) -> Result<Json<Vec<Stock>>, AppError> {
    Ok(Json(state.store.get_all().await?))
}

pub async fn update_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
    ApiJson(req): ApiJson<NewStock>,
) -> Result<Json<StockResponse>, AppError> {
    req.validate().map_err(AppError::Validation)?;

    let affected = state.store.update(id, &req).await?;
    tracing::info!(id, affected, "stock updated");

    Ok(Json(StockResponse {
        id,
        message: format!("Stock updated successfully. Total rows/record affected {affected}"),
    }))
}

pub async fn delete_stock(
    State(state): State<AppState>,
    StockId(id): StockId,
) -> Result<Json<StockResponse>, AppError> {
    let affected = state.store.delete(id).await?;
    tracing::info!(id, affected, "stock deleted");

    Ok(Json(StockResponse {
        id,
        message: format!("Stock deleted successfully. Total rows/record affected {affected}"),
    }))
}
