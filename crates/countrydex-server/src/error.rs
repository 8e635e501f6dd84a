//! HTTP error types

use std::any::Any;

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use countrydex_core::QueryError;
use serde_json::json;
use thiserror::Error;

/// Message attached to every 500 response
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Errors returned by the API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// `code` query parameter missing or empty
    #[error("No country code provided")]
    MissingCode,

    /// Query string could not be decoded
    #[error("invalid query string: {0}")]
    InvalidQuery(String),

    /// No route matched
    #[error("no route for {0}")]
    NotFound(String),

    /// Route exists but not for this method
    #[error("method {method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Anything else
    #[error("{0}")]
    Internal(String),
}

impl From<QueryError> for ApiError {
    fn from(e: QueryError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::MissingCode => (
                StatusCode::BAD_REQUEST,
                json!({ "isValid": false, "error": self.to_string() }),
            ),
            ApiError::InvalidQuery(_) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string(), "message": "Invalid request" }),
            ),
            ApiError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Not found", "message": self.to_string() }),
            ),
            ApiError::MethodNotAllowed { .. } => (
                StatusCode::METHOD_NOT_ALLOWED,
                json!({ "error": "Method not allowed", "message": self.to_string() }),
            ),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": msg, "message": UNEXPECTED_ERROR }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Convert a handler panic into the standard 500 body.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    ApiError::Internal(message).into_response()
}
