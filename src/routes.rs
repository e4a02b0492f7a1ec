use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::{
    create_stock, delete_stock, get_stock, get_stocks, health, not_found, update_stock,
};
use crate::state::AppState;

/// Builds the HTTP surface. Unknown paths, and known paths hit with the wrong
/// method, both answer with a JSON 404.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health).fallback(not_found))
        .route("/api/stocks", get(get_stocks).fallback(not_found))
        .route(
            "/api/stocks/:id",
            get(get_stock).put(update_stock).fallback(not_found),
        )
        .route("/api/newstock", post(create_stock).fallback(not_found))
        .route("/api/deletestock/:id", delete(delete_stock).fallback(not_found))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
