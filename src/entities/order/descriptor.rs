//! Entity descriptor for Order

use super::handlers::{
    OrderAppState, create_order, delete_order, get_order, list_orders, update_order,
};
use super::model::Order;
use crate::core::CollectionStore;
use crate::server::entity_registry::EntityDescriptor;
use crate::server::exposure::rest::method_not_allowed;
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Order entity
pub struct OrderDescriptor {
    pub store: Arc<dyn CollectionStore<Order>>,
}

impl OrderDescriptor {
    pub fn new(store: Arc<dyn CollectionStore<Order>>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        let state = OrderAppState::new(self.store.clone());

        Router::new()
            .route(
                "/orders",
                get(list_orders)
                    .post(create_order)
                    .fallback(method_not_allowed),
            )
            .route(
                "/orders/{order_id}",
                get(get_order)
                    .put(update_order)
                    .delete(delete_order)
                    .fallback(method_not_allowed),
            )
            .with_state(state)
    }
}
