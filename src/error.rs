//! Error types for the store
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Unified error type for all store backends.
///
/// Each variant is a stable, inspectable kind: the HTTP boundary matches on
/// the variant (never the message) to choose a status code, and embedding
/// callers can do the same with `matches!`.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Key absent on a Get or Delete. Never produced by Set.
    #[error("key not found: {0}")]
    NotFound(String),

    /// Underlying persistent-medium failure (permissions, disk full, ...)
    #[error("storage i/o failure: {0}")]
    Io(#[source] std::io::Error),

    /// Invalid cache capacity at construction
    #[error("invalid cache capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),

    /// Encode/decode failure from the structured value helpers
    #[error("serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// True when the error is the not-found kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::InvalidCapacity(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
