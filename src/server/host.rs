//! Server host holding the application state shared by every exposure
//!
//! The host owns the configuration, both collection stores and the entity
//! registry. Exposures consume it to produce a router.

use crate::config::AppConfig;
use crate::core::{Chain, CollectionStore, Entity, Payload, RequestContext};
use crate::entities::dish::{DishChains, DishDescriptor};
use crate::entities::order::{OrderChains, OrderDescriptor};
use crate::entities::{Dish, Order};
use crate::server::entity_registry::EntityRegistry;
use anyhow::{Context, Result, anyhow, bail};
use serde_json::Value;
use std::sync::Arc;

/// Host context containing all application state
pub struct ServerHost {
    /// Effective configuration (file, defaults and env overrides applied)
    pub config: Arc<AppConfig>,

    /// Dish collection
    pub dishes: Arc<dyn CollectionStore<Dish>>,

    /// Order collection
    pub orders: Arc<dyn CollectionStore<Order>>,

    /// Registry of resource routes
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build the host and register the dish and order resources
    pub fn new(
        config: AppConfig,
        dishes: Arc<dyn CollectionStore<Dish>>,
        orders: Arc<dyn CollectionStore<Order>>,
    ) -> Self {
        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(DishDescriptor::new(dishes.clone())));
        entity_registry.register(Box::new(OrderDescriptor::new(orders.clone())));

        Self {
            config: Arc::new(config),
            dishes,
            orders,
            entity_registry,
        }
    }

    /// Insert the configured seed records into the stores
    ///
    /// Each record must pass the same chain a create request would.
    pub fn load_seed(&self) -> Result<()> {
        let dish_chains = DishChains::new(self.dishes.clone());
        let order_chains = OrderChains::new(self.orders.clone());

        for dish in &self.config.seed.dishes {
            check_seed(&dish_chains.create, dish)?;
            self.dishes
                .insert(dish.clone())
                .with_context(|| format!("Failed to seed dish {}", dish.id))?;
        }
        for order in &self.config.seed.orders {
            check_seed(&order_chains.create, order)?;
            self.orders
                .insert(order.clone())
                .with_context(|| format!("Failed to seed order {}", order.id))?;
        }

        tracing::info!(
            dishes = self.config.seed.dishes.len(),
            orders = self.config.seed.orders.len(),
            "seed data loaded"
        );
        Ok(())
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }
}

/// Run a seed record, in its wire form, through a create chain
fn check_seed<T: Entity>(chain: &Chain<T>, entity: &T) -> Result<()> {
    let fields = match serde_json::to_value(entity)? {
        Value::Object(fields) => fields,
        other => bail!("Seed {} is not an object: {}", T::resource_name_singular(), other),
    };
    let mut ctx = RequestContext::new(Payload::from(fields));
    chain.run(&mut ctx).map_err(|e| {
        anyhow!(
            "Invalid seed {} {}: {}",
            T::resource_name_singular(),
            entity.id(),
            e
        )
    })
}
