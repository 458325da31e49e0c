//! Axum-specific error types and mappings.
//!
//! The 400 bodies are part of the wire contract and must match exactly,
//! so client errors map to fixed plain-text messages rather than a JSON
//! error envelope. Backend failures map to 500.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use prodcat_core::RepositoryError;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request body could not be parsed as JSON.
    #[error("Json payload invalid")]
    InvalidPayload,

    /// Request body parsed but failed product validation.
    #[error("Product input invalid")]
    InvalidProduct,

    /// Storage backend failure; unrecoverable for this request.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidPayload => {
                (StatusCode::BAD_REQUEST, "Json payload invalid").into_response()
            }
            Self::InvalidProduct => {
                (StatusCode::BAD_REQUEST, "Product input invalid").into_response()
            }
            Self::Internal(msg) => {
                tracing::error!(error = %msg, "storage backend failure");
                (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response()
            }
        }
    }
}

impl From<RepositoryError> for HttpError {
    fn from(err: RepositoryError) -> Self {
        Self::Internal(err.to_string())
    }
}
