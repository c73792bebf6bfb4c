//! Per-request context threaded through a validation chain
//!
//! The context is created once per request with the normalized payload and,
//! for item routes, the route id. Validators read the payload and may publish
//! the resolved entity; the terminal handler consumes the context afterwards.

use crate::core::Entity;
use crate::core::error::{ApiError, ApiResult};
use serde_json::{Map, Value};

/// The `data` object of a request body.
///
/// Built exactly once per request. A body without a `data` object (missing,
/// empty, `null`, or some other JSON type) normalizes to an empty mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// Normalize a raw request body into its `data` payload
    pub fn from_body(body: Value) -> Self {
        match body {
            Value::Object(mut envelope) => match envelope.remove("data") {
                Some(Value::Object(data)) => Self(data),
                _ => Self::default(),
            },
            _ => Self::default(),
        }
    }

    /// Get a field of the payload
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Borrow the underlying JSON object
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Convert into a JSON object value
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Request state shared by the steps of one chain run
#[derive(Debug)]
pub struct RequestContext<T> {
    route_id: Option<String>,
    payload: Payload,
    entity: Option<T>,
}

impl<T: Entity> RequestContext<T> {
    /// Context for a collection route (no route id)
    pub fn new(payload: Payload) -> Self {
        Self {
            route_id: None,
            payload,
            entity: None,
        }
    }

    /// Context for an item route such as `/dishes/{dish_id}`
    pub fn for_route(route_id: impl Into<String>, payload: Payload) -> Self {
        Self {
            route_id: Some(route_id.into()),
            payload,
            entity: None,
        }
    }

    /// The id taken from the request path
    pub fn route_id(&self) -> ApiResult<&str> {
        self.route_id.as_deref().ok_or_else(|| {
            ApiError::Internal(format!(
                "{} route id requested on a collection route",
                T::resource_name_singular()
            ))
        })
    }

    /// The normalized request payload
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Publish the entity resolved from the route id
    pub fn resolve(&mut self, entity: T) {
        self.entity = Some(entity);
    }

    /// The resolved entity
    ///
    /// Errors when no existence step ran earlier in the chain.
    pub fn entity(&self) -> ApiResult<&T> {
        self.entity.as_ref().ok_or_else(Self::unresolved)
    }

    /// Split into the payload and the resolved entity
    pub fn into_resolved(self) -> ApiResult<(Payload, T)> {
        match self.entity {
            Some(entity) => Ok((self.payload, entity)),
            None => Err(Self::unresolved()),
        }
    }

    /// Consume the context, keeping only the payload
    pub fn into_payload(self) -> Payload {
        self.payload
    }

    fn unresolved() -> ApiError {
        ApiError::Internal(format!(
            "{} was read before an existence check resolved it",
            T::resource_name_singular()
        ))
    }
}
