//! Reusable chain steps
//!
//! Each function builds a step for a [`Chain`](super::Chain). These are the
//! resource-independent checks; dish and order rules live next to their models.

use crate::core::context::{Payload, RequestContext};
use crate::core::error::{ApiError, ApiResult};
use crate::core::{CollectionStore, Entity};
use serde_json::Value;
use std::sync::Arc;

/// JavaScript-style truthiness of a JSON value.
///
/// `null`, `false`, `0`, and `""` are falsy; everything else, including empty
/// arrays and objects, is truthy. Presence checks treat falsy values as absent.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// A field of the payload, if present with a truthy value
pub fn truthy_field<'a>(payload: &'a Payload, field: &str) -> Option<&'a Value> {
    payload.get(field).filter(|value| is_truthy(value))
}

/// An integer of at least 1
pub fn positive_integer(value: &Value) -> Option<u64> {
    value.as_u64().filter(|n| *n >= 1)
}

/// Step: the payload must carry a truthy `field`
pub fn body_has<T: Entity>(
    field: &'static str,
) -> impl Fn(&mut RequestContext<T>) -> ApiResult<()> + Send + Sync + Clone {
    move |ctx: &mut RequestContext<T>| {
        if truthy_field(ctx.payload(), field).is_some() {
            Ok(())
        } else {
            Err(ApiError::validation(format!(
                "{} must include a {}",
                T::display_name(),
                field
            )))
        }
    }
}

/// Step: the route id must resolve to a stored entity
///
/// On success the entity is published into the context for later steps and
/// the terminal handler.
pub fn exists<T: Entity>(
    store: Arc<dyn CollectionStore<T>>,
) -> impl Fn(&mut RequestContext<T>) -> ApiResult<()> + Send + Sync + Clone {
    move |ctx: &mut RequestContext<T>| {
        let id = ctx.route_id()?.to_string();
        match store.find(&id)? {
            Some(entity) => {
                ctx.resolve(entity);
                Ok(())
            }
            None => Err(T::not_found(&id)),
        }
    }
}

/// Step: a body id, when supplied, must equal the resolved entity's id
///
/// A missing or falsy body id passes. Numeric ids compare by their decimal
/// text, so `5` matches the stored id `"5"`.
pub fn id_matches<T: Entity>() -> impl Fn(&mut RequestContext<T>) -> ApiResult<()> + Send + Sync + Clone
{
    |ctx: &mut RequestContext<T>| {
        let Some(body_id) = truthy_field(ctx.payload(), "id") else {
            return Ok(());
        };
        let body_id = match body_id {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        if body_id == ctx.entity()?.id() {
            Ok(())
        } else {
            Err(T::id_mismatch(&body_id, ctx.route_id()?))
        }
    }
}
