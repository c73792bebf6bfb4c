//! Entity descriptor for Dish

use super::handlers::{DishAppState, create_dish, get_dish, list_dishes, update_dish};
use super::model::Dish;
use crate::core::CollectionStore;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::exposure::rest::method_not_allowed;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Dish entity
///
/// Dishes have no delete route.
pub struct DishDescriptor {
    pub store: Arc<dyn CollectionStore<Dish>>,
}

impl DishDescriptor {
    pub fn new(store: Arc<dyn CollectionStore<Dish>>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for DishDescriptor {
    fn entity_type(&self) -> &str {
        "dish"
    }

    fn plural(&self) -> &str {
        "dishes"
    }

    fn build_routes(&self) -> Router {
        let state = DishAppState::new(self.store.clone());

        Router::new()
            .route(
                "/dishes",
                get(list_dishes)
                    .post(create_dish)
                    .fallback(method_not_allowed),
            )
            .route(
                "/dishes/{dish_id}",
                get(get_dish).put(update_dish).fallback(method_not_allowed),
            )
            .with_state(state)
    }
}
