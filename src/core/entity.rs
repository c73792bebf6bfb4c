//! Entity trait defining the core abstraction for stored resources

use crate::core::error::ApiError;
use serde::Serialize;

/// Base trait for every resource kept in a collection store.
///
/// An entity has an opaque string id that is assigned once at creation and
/// never changes. The naming methods feed URLs and error messages.
pub trait Entity: Clone + Serialize + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "dishes")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "dish")
    fn resource_name_singular() -> &'static str;

    /// Capitalized name used as the subject of validation messages (e.g., "Dish")
    fn display_name() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> &str;

    /// Error returned when a route id resolves to nothing
    fn not_found(id: &str) -> ApiError {
        ApiError::not_found(format!("{} does not exist: {}", Self::display_name(), id))
    }

    /// Error returned when the body id disagrees with the route id
    fn id_mismatch(body_id: &str, route_id: &str) -> ApiError {
        let name = Self::display_name();
        ApiError::validation(format!(
            "{name} id does not match route id. {name}: {body_id}, Route: {route_id}"
        ))
    }
}
