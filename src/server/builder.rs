//! ServerBuilder for fluent API to build the HTTP server

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::CollectionStore;
use crate::entities::{Dish, Order};
use crate::storage::InMemoryCollection;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the GrubDash server
///
/// Stores default to in-memory collections; configured seed data is loaded
/// into whichever stores are in use when the host is built.
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_config(AppConfig::from_yaml_file("config/grubdash.yaml")?)
///     .build()?;
/// ```
pub struct ServerBuilder {
    config: Option<AppConfig>,
    dish_store: Option<Arc<dyn CollectionStore<Dish>>>,
    order_store: Option<Arc<dyn CollectionStore<Order>>>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder
    pub fn new() -> Self {
        Self {
            config: None,
            dish_store: None,
            order_store: None,
        }
    }

    /// Set the configuration (defaults to `AppConfig::default()`)
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a specific dish store
    pub fn with_dish_store(mut self, store: impl CollectionStore<Dish> + 'static) -> Self {
        self.dish_store = Some(Arc::new(store));
        self
    }

    /// Use a specific order store
    pub fn with_order_store(mut self, store: impl CollectionStore<Order> + 'static) -> Self {
        self.order_store = Some(Arc::new(store));
        self
    }

    /// Build the host: resolve stores, register resources, load seed data
    pub fn build_host(self) -> Result<ServerHost> {
        let config = self.config.unwrap_or_default();
        config.validate_config()?;

        let dishes: Arc<dyn CollectionStore<Dish>> = match self.dish_store {
            Some(store) => store,
            None => Arc::new(InMemoryCollection::<Dish>::new()),
        };
        let orders: Arc<dyn CollectionStore<Order>> = match self.order_store {
            Some(store) => store,
            None => Arc::new(InMemoryCollection::<Order>::new()),
        };

        let host = ServerHost::new(config, dishes, orders);
        host.load_seed()?;
        Ok(host)
    }

    /// Build the final REST router
    pub fn build(self) -> Result<Router> {
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured host and port
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let host = Arc::new(self.build_host()?);
        let addr = host.config.address();
        let app = RestExposure::build_router(host)?;
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SeedData, ServerConfig};

    fn dish(id: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: "Tacos".to_string(),
            description: "Three of them".to_string(),
            image_url: "https://example.com/tacos.png".to_string(),
            price: 9,
        }
    }

    #[test]
    fn test_new_creates_empty_builder() {
        let builder = ServerBuilder::new();
        assert!(builder.config.is_none());
        assert!(builder.dish_store.is_none());
        assert!(builder.order_store.is_none());
    }

    #[test]
    fn test_build_host_defaults() {
        let host = ServerBuilder::default().build_host().unwrap();
        assert_eq!(host.config.address(), "0.0.0.0:5000");
        assert!(host.dishes.is_empty().unwrap());
        assert!(host.orders.is_empty().unwrap());
    }

    #[test]
    fn test_build_host_loads_seed() {
        let config = AppConfig {
            seed: SeedData {
                dishes: vec![dish("d1"), dish("d2")],
                orders: vec![],
            },
            ..AppConfig::default()
        };
        let host = ServerBuilder::new().with_config(config).build_host().unwrap();
        assert_eq!(host.dishes.len().unwrap(), 2);
    }

    #[test]
    fn test_custom_store_is_shared() {
        let store = InMemoryCollection::with_seed(vec![dish("d1")]).unwrap();
        let host = ServerBuilder::new()
            .with_dish_store(store.clone())
            .build_host()
            .unwrap();

        host.dishes.insert(dish("d2")).unwrap();
        assert_eq!(store.len().unwrap(), 2);
    }

    #[test]
    fn test_build_host_rejects_invalid_config() {
        let config = AppConfig {
            server: ServerConfig {
                host: String::new(),
                port: 5000,
            },
            ..AppConfig::default()
        };
        assert!(ServerBuilder::new().with_config(config).build_host().is_err());
    }

    #[test]
    fn test_build_produces_router() {
        let router = ServerBuilder::new().build();
        assert!(router.is_ok());
    }
}
