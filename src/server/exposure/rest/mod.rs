//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` with the health
//! route, every registered resource, the JSON fallbacks for unknown paths and
//! unsupported methods, and the HTTP tracing and CORS layers.

use super::super::host::ServerHost;
use crate::core::ApiError;
use anyhow::Result;
use axum::{
    Json, Router,
    http::{Method, Uri},
    routing::get,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// # Returns
    ///
    /// Returns a fully configured Axum router with:
    /// - Health check route
    /// - Dish and order routes
    /// - 404 fallback for unknown paths, 405 fallback per known path
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let app = Self::health_routes()
            .merge(host.entity_registry.build_routes())
            .fallback(route_not_found)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            );

        tracing::debug!(paths = ?host.entity_registry.paths(), "REST routes registered");
        Ok(app)
    }

    fn health_routes() -> Router {
        Router::new().route(
            "/health",
            get(Self::health_check).fallback(method_not_allowed),
        )
    }

    async fn health_check() -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": "grubdash"
        }))
    }
}

/// Fallback for a known path hit with a verb it does not serve
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    ApiError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}

/// Fallback for any path no resource claims
pub async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
