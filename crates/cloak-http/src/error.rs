//! HTTP error types for Cloak

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cloak_core::UnknownAlgorithm;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// HTTP errors for Cloak operations
///
/// Verification mismatch is modeled here rather than in the core: the core
/// reports a boolean, and this layer gives `false` its own client-visible
/// failure state.
#[derive(Debug, Error)]
pub enum CloakHttpError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error(transparent)]
    UnknownAlgorithm(#[from] UnknownAlgorithm),

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

/// Error response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for CloakHttpError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            CloakHttpError::ParseError(msg) => {
                (StatusCode::BAD_REQUEST, "PARSE_ERROR", msg.clone())
            }
            CloakHttpError::UnknownAlgorithm(e) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_ALGORITHM", e.to_string())
            }
            CloakHttpError::InvalidSignature => (
                StatusCode::BAD_REQUEST,
                "INVALID_SIGNATURE",
                "Invalid signature".to_string(),
            ),
            CloakHttpError::ServerError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "SERVER_ERROR",
                msg.clone(),
            ),
            CloakHttpError::RequestError(e) => {
                (StatusCode::BAD_GATEWAY, "REQUEST_ERROR", e.to_string())
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
