//! Order validation rules and chains
//!
//! Status rules:
//! - on create, a supplied status must be one of the four values; there is
//!   no transition check
//! - on update, an order that is already delivered rejects every change, and
//!   otherwise the proposed status must be one of the four values
//! - only pending orders can be deleted

use super::model::{Order, OrderStatus, invalid_status};
use crate::core::validation::{body_has, exists, id_matches, positive_integer};
use crate::core::{ApiError, ApiResult, Chain, CollectionStore, RequestContext};
use serde_json::Value;
use std::sync::Arc;

const WRITABLE_FIELDS: [&str; 3] = ["deliverTo", "mobileNumber", "dishes"];

/// Step: `dishes` must be a non-empty list whose items carry a quantity of at least 1
///
/// Only the first offending item is reported.
pub fn order_dishes() -> impl Fn(&mut RequestContext<Order>) -> ApiResult<()> + Send + Sync + Clone
{
    |ctx: &mut RequestContext<Order>| {
        let items = match ctx.payload().get("dishes") {
            Some(Value::Array(items)) if !items.is_empty() => items,
            _ => {
                return Err(ApiError::validation(
                    "Order must include at least one dish",
                ));
            }
        };

        match items
            .iter()
            .position(|item| item.get("quantity").and_then(positive_integer).is_none())
        {
            Some(index) => Err(ApiError::validation(format!(
                "dish {} must have a quantity that is an integer greater than 0",
                index
            ))),
            None => Ok(()),
        }
    }
}

/// Step: update-time status rules
pub fn order_status_transition()
-> impl Fn(&mut RequestContext<Order>) -> ApiResult<()> + Send + Sync + Clone {
    |ctx: &mut RequestContext<Order>| {
        if ctx.entity()?.status.is_terminal() {
            return Err(ApiError::validation("A delivered order cannot be changed"));
        }
        match OrderStatus::from_payload(ctx.payload())? {
            Some(_) => Ok(()),
            None => Err(invalid_status()),
        }
    }
}

/// Step: create-time status check; absence is allowed
pub fn order_status_if_present()
-> impl Fn(&mut RequestContext<Order>) -> ApiResult<()> + Send + Sync + Clone {
    |ctx: &mut RequestContext<Order>| OrderStatus::from_payload(ctx.payload()).map(|_| ())
}

/// Step: the resolved order must still be pending
pub fn pending_only() -> impl Fn(&mut RequestContext<Order>) -> ApiResult<()> + Send + Sync + Clone
{
    |ctx: &mut RequestContext<Order>| {
        if ctx.entity()?.status == OrderStatus::Pending {
            Ok(())
        } else {
            Err(ApiError::validation(
                "An order cannot be deleted unless it is pending",
            ))
        }
    }
}

/// The chains guarding each order operation
pub struct OrderChains {
    pub create: Chain<Order>,
    pub read: Chain<Order>,
    pub update: Chain<Order>,
    pub delete: Chain<Order>,
}

impl OrderChains {
    pub fn new(store: Arc<dyn CollectionStore<Order>>) -> Self {
        let create = WRITABLE_FIELDS
            .into_iter()
            .fold(Chain::<Order>::new("orders.create"), |chain, field| {
                chain.step(body_has(field))
            })
            .step(order_dishes())
            .step(order_status_if_present());

        let read = Chain::<Order>::new("orders.read").step(exists(store.clone()));

        let update = WRITABLE_FIELDS
            .into_iter()
            .fold(
                Chain::<Order>::new("orders.update")
                    .step(exists(store.clone()))
                    .step(id_matches())
                    .step(order_status_transition()),
                |chain, field| chain.step(body_has(field)),
            )
            .step(order_dishes());

        let delete = Chain::<Order>::new("orders.delete")
            .step(exists(store))
            .step(pending_only());

        Self {
            create,
            read,
            update,
            delete,
        }
    }
}
