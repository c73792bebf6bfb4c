//! Typed error handling for the API
//!
//! Every failure a request can hit is an [`ApiError`]. Validators short-circuit
//! a chain by returning one, and axum turns it into the wire envelope:
//!
//! ```json
//! { "status": 400, "message": "Dish must include a name" }
//! ```
//!
//! # Error Categories
//!
//! - [`ApiError::Validation`]: malformed, missing or inconsistent input, or an
//!   illegal order status transition (400)
//! - [`ApiError::NotFound`]: the route id does not resolve to an entity (404)
//! - [`ApiError::RouteNotFound`] / [`ApiError::MethodNotAllowed`]: the request
//!   never reached a resource handler (404 / 405)
//! - [`ApiError::Internal`]: storage faults and chain misconfiguration (500)

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

/// The error type returned by validators, handlers and the router fallbacks
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Input failed a validation step
    #[error("{message}")]
    Validation { message: String },

    /// The entity addressed by the route does not exist
    #[error("{message}")]
    NotFound { message: String },

    /// No route matches the request path
    #[error("Path not found: {path}")]
    RouteNotFound { path: String },

    /// The path exists but does not accept this method
    #[error("{method} not allowed for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// Storage failure or a chain assembled in the wrong order
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error body sent to clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// HTTP status, mirrored from the response line
    pub status: u16,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    /// Build a 400 validation error
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
        }
    }

    /// Build a 404 error for an unresolved entity
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Convert to the client-facing envelope
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

/// Storage errors arrive as `anyhow::Error` from the store seam
impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// A specialized Result type for request handling
pub type ApiResult<T> = Result<T, ApiError>;
