//! The `{ data: ... }` envelope on both sides of the wire
//!
//! This module provides the `DataEnvelope` extractor that reads the request
//! body once and normalizes it into a [`Payload`] before any validator runs,
//! and `DataBody`, the matching success response wrapper.

use crate::core::context::Payload;
use crate::core::error::ApiError;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success response body: `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBody<T> {
    pub data: T,
}

impl<T> DataBody<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Axum extractor yielding the normalized request payload
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_dish(
///     State(state): State<DishAppState>,
///     envelope: DataEnvelope,
/// ) -> ApiResult<(StatusCode, Json<DataBody<Dish>>)> {
///     let mut ctx = RequestContext::new(envelope.into_payload());
///     // ...
/// }
/// ```
///
/// An empty body is accepted and yields an empty payload, so a request
/// without a body fails on the first presence check rather than on parsing.
#[derive(Debug, Clone, Default)]
pub struct DataEnvelope(pub Payload);

impl DataEnvelope {
    /// Get the inner payload
    pub fn into_payload(self) -> Payload {
        self.0
    }
}

impl<S> FromRequest<S> for DataEnvelope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| ApiError::validation(format!("Unreadable request body: {}", e.body_text())))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let body: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ApiError::validation(format!("Request body is not valid JSON: {}", e)))?;

        Ok(Self(Payload::from_body(body)))
    }
}
