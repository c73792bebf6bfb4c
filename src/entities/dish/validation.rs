//! Dish validation rules and chains

use super::model::Dish;
use crate::core::validation::{body_has, exists, id_matches, positive_integer};
use crate::core::{ApiError, ApiResult, Chain, CollectionStore, RequestContext};
use std::sync::Arc;

const WRITABLE_FIELDS: [&str; 4] = ["name", "description", "image_url", "price"];

/// Step: `price` must be an integer of at least 1
pub fn dish_price() -> impl Fn(&mut RequestContext<Dish>) -> ApiResult<()> + Send + Sync + Clone {
    |ctx: &mut RequestContext<Dish>| match ctx.payload().get("price").and_then(positive_integer) {
        Some(_) => Ok(()),
        None => Err(ApiError::validation(
            "Dish must have a price that is an integer greater than 0",
        )),
    }
}

/// The chains guarding each dish operation
pub struct DishChains {
    pub create: Chain<Dish>,
    pub read: Chain<Dish>,
    pub update: Chain<Dish>,
}

impl DishChains {
    pub fn new(store: Arc<dyn CollectionStore<Dish>>) -> Self {
        let create = WRITABLE_FIELDS
            .into_iter()
            .fold(Chain::<Dish>::new("dishes.create"), |chain, field| {
                chain.step(body_has(field))
            })
            .step(dish_price());

        let read = Chain::<Dish>::new("dishes.read").step(exists(store.clone()));

        let update = WRITABLE_FIELDS
            .into_iter()
            .fold(
                Chain::<Dish>::new("dishes.update")
                    .step(exists(store))
                    .step(id_matches()),
                |chain, field| chain.step(body_has(field)),
            )
            .step(dish_price());

        Self {
            create,
            read,
            update,
        }
    }
}
