//! Entity registry for collecting resource descriptors and their routes

use axum::Router;

/// Trait that describes how to build routes for an entity
///
/// Each resource (Dish, Order) implements this trait to provide its routes,
/// including a method fallback for verbs it does not support.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "order")
    fn entity_type(&self) -> &str;

    /// The plural form (e.g., "orders")
    fn plural(&self) -> &str;

    /// Build the routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET /{plural}
    /// - POST /{plural}
    /// - GET /{plural}/{id}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities in the application
///
/// Descriptors keep their registration order. Registering an entity type a
/// second time replaces the earlier descriptor in place.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        match self
            .descriptors
            .iter()
            .position(|d| d.entity_type() == descriptor.entity_type())
        {
            Some(index) => self.descriptors[index] = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }

    /// Collection paths served by the registered entities (e.g., "/dishes")
    pub fn paths(&self) -> Vec<String> {
        self.descriptors
            .iter()
            .map(|d| format!("/{}", d.plural()))
            .collect()
    }
}
