use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("stock {0} not found")]
    NotFound(i64),

    #[error("{message}")]
    Body { status: StatusCode, message: String },

    #[error("route not found")]
    RouteNotFound,

    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match &rejection {
            JsonRejection::BytesRejection(_) => AppError::Body {
                status: rejection.status(),
                message: rejection.body_text(),
            },
            _ => AppError::Validation(rejection.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Body { status, message } => (*status, message.clone()),
            AppError::NotFound(_) | AppError::RouteNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Persistence(err) => {
                tracing::error!(error = %err, "stock store call failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
        };

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn maps_errors_to_status_codes() {
        let cases = [
            (AppError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound(7), StatusCode::NOT_FOUND),
            (AppError::RouteNotFound, StatusCode::NOT_FOUND),
            (
                AppError::Body {
                    status: StatusCode::PAYLOAD_TOO_LARGE,
                    message: "length limit exceeded".into(),
                },
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AppError::Persistence(StoreError::Timeout(Duration::from_secs(1))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn not_found_names_the_id() {
        assert_eq!(AppError::NotFound(42).to_string(), "stock 42 not found");
    }
}
