//! # GrubDash
//!
//! A small REST backend for a food-delivery storefront: a menu of dishes and a
//! set of delivery orders, both kept in memory.
//!
//! ## Features
//!
//! - **Validation chains**: every request runs an ordered list of steps that
//!   stops at the first failure and answers `{ "status", "message" }`
//! - **Order lifecycle**: `pending` → `preparing` → `out-for-delivery` →
//!   `delivered`, with delivered orders frozen and only pending orders deletable
//! - **JSON fallbacks**: unknown paths answer 404, unsupported verbs answer 405
//! - **Configuration-Based**: listener address and seed data from YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use grubdash::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = AppConfig::from_yaml_file("config/grubdash.yaml")?.with_env_overrides()?;
//!     ServerBuilder::new().with_config(config).serve().await
//! }
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, ApiResult, Chain, CollectionStore, DataBody, DataEnvelope, Entity,
        ErrorResponse, Payload, RequestContext, next_id,
    };

    // === Entities ===
    pub use crate::entities::dish::{Dish, DishChains, DishDescriptor, DishFields};
    pub use crate::entities::order::{
        Order, OrderChains, OrderDescriptor, OrderFields, OrderLineItem, OrderStatus,
    };

    // === Storage ===
    pub use crate::storage::InMemoryCollection;

    // === Config ===
    pub use crate::config::{AppConfig, SeedData, ServerConfig};

    // === Server ===
    pub use crate::server::{
        EntityDescriptor, EntityRegistry, RestExposure, ServerBuilder, ServerHost,
    };

    // === External dependencies ===
    pub use anyhow::Result;
    pub use serde::{Deserialize, Serialize};

    // === Axum ===
    pub use axum::Router;
}
