//! HTTP-facing errors.
//!
//! `NotFound` renders as a bare 404. Input problems render as 400 with a
//! problem body listing the offending field:
//!
//! ```json
//! {"title":"One or more validation errors occurred.","status":400,"errors":{"name":["The name field is required."]}}
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("todo {0} not found")]
    NotFound(i32),

    /// A field failed validation after the body was decoded.
    #[error("{field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// The body could not be decoded at all.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound(id),
            StoreError::Exhausted => ApiError::Internal(err.to_string()),
        }
    }
}

fn problem(field: &str, message: &str) -> Response {
    let mut errors = Map::new();
    errors.insert(field.to_string(), json!([message]));
    let body = json!({
        "title": "One or more validation errors occurred.",
        "status": StatusCode::BAD_REQUEST.as_u16(),
        "errors": errors,
    });
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(id) => {
                tracing::debug!(id, "todo not found");
                StatusCode::NOT_FOUND.into_response()
            }
            ApiError::Validation { field, message } => {
                tracing::debug!(field, %message, "validation failed");
                problem(field, &message)
            }
            ApiError::InvalidBody(message) => {
                tracing::debug!(%message, "rejected request body");
                problem("body", &message)
            }
            ApiError::Internal(message) => {
                tracing::error!(%message, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
