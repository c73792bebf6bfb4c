//! Order entity model

use crate::core::validation::truthy_field;
use crate::core::{ApiError, ApiResult, Entity, Payload};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Lifecycle of an order. `Delivered` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }

    /// Whether an order in this status may still be updated
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    /// Read `status` from a payload
    ///
    /// `Ok(None)` when the field is absent or falsy; an error when it is
    /// present but not one of the four statuses.
    pub fn from_payload(payload: &Payload) -> ApiResult<Option<Self>> {
        match truthy_field(payload, "status") {
            None => Ok(None),
            Some(value) => value
                .as_str()
                .and_then(Self::parse)
                .map(Some)
                .ok_or_else(invalid_status),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn invalid_status() -> ApiError {
    let allowed: Vec<&str> = OrderStatus::ALL.iter().map(OrderStatus::as_str).collect();
    ApiError::validation(format!("Order must have a status of {}", allowed.join(", ")))
}

/// One line of an order
///
/// Clients may embed any fields of the referenced dish (`id`, `name`,
/// `price`, ...); they are kept as sent. Only `quantity` is typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub quantity: u64,
    #[serde(flatten)]
    pub dish: Map<String, Value>,
}

/// A delivery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderLineItem>,
}

impl Entity for Order {
    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn display_name() -> &'static str {
        "Order"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn not_found(id: &str) -> ApiError {
        ApiError::not_found(format!("Order id not found: {}", id))
    }
}

/// The client-writable fields of an order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: Option<OrderStatus>,
    pub dishes: Vec<OrderLineItem>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOrderFields {
    deliver_to: String,
    mobile_number: String,
    dishes: Vec<OrderLineItem>,
}

impl OrderFields {
    pub fn from_payload(payload: Payload) -> ApiResult<Self> {
        let status = OrderStatus::from_payload(&payload)?;
        let raw: RawOrderFields = serde_json::from_value(payload.into_value())
            .map_err(|e| ApiError::validation(format!("Order payload is malformed: {}", e)))?;

        Ok(Self {
            deliver_to: raw.deliver_to,
            mobile_number: raw.mobile_number,
            status,
            dishes: raw.dishes,
        })
    }

    /// Build a new order under `id`; a missing status starts as pending
    pub fn into_order(self, id: String) -> Order {
        Order {
            id,
            deliver_to: self.deliver_to,
            mobile_number: self.mobile_number,
            status: self.status.unwrap_or_default(),
            dishes: self.dishes,
        }
    }

    /// Overwrite every mutable field of `order`, leaving its id alone
    pub fn apply_to(self, order: &mut Order) {
        order.deliver_to = self.deliver_to;
        order.mobile_number = self.mobile_number;
        if let Some(status) = self.status {
            order.status = status;
        }
        order.dishes = self.dishes;
    }
}
