//! Dish entity model

use crate::core::{ApiError, ApiResult, Entity, Payload};
use serde::{Deserialize, Serialize};

/// A dish on the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: u64,
}

impl Entity for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn resource_name_singular() -> &'static str {
        "dish"
    }

    fn display_name() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// The client-writable fields of a dish
///
/// Shaped from a payload that already passed the dish chain; a body id is
/// ignored here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DishFields {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub price: u64,
}

impl DishFields {
    pub fn from_payload(payload: Payload) -> ApiResult<Self> {
        serde_json::from_value(payload.into_value())
            .map_err(|e| ApiError::validation(format!("Dish payload is malformed: {}", e)))
    }

    /// Build a new dish under `id`
    pub fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            image_url: self.image_url,
            price: self.price,
        }
    }

    /// Overwrite every mutable field of `dish`, leaving its id alone
    pub fn apply_to(self, dish: &mut Dish) {
        dish.name = self.name;
        dish.description = self.description;
        dish.image_url = self.image_url;
        dish.price = self.price;
    }
}
