use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::db::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("ToDo not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, None),
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, None),
            // Hide backend detail from the message, carry it in `error`.
            ApiError::Internal(detail) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(detail.clone()))
            }
        };

        let mut body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });
        if let Some(detail) = detail {
            body["error"] = serde_json::json!(detail);
        }

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        tracing::error!(error = %e, "store operation failed");
        ApiError::Internal(e.to_string())
    }
}
