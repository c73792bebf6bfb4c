//! Dish HTTP handlers

use super::model::{Dish, DishFields};
use super::validation::DishChains;
use crate::core::{
    ApiResult, CollectionStore, DataBody, DataEnvelope, Entity, Payload, RequestContext, next_id,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Dish-specific AppState
///
/// `write_gate` is held from the start of a mutating chain until its write
/// lands, so the guards always judge the state that gets written over.
#[derive(Clone)]
pub struct DishAppState {
    pub store: Arc<dyn CollectionStore<Dish>>,
    pub chains: Arc<DishChains>,
    pub write_gate: Arc<Mutex<()>>,
}

impl DishAppState {
    pub fn new(store: Arc<dyn CollectionStore<Dish>>) -> Self {
        let chains = Arc::new(DishChains::new(store.clone()));
        Self {
            store,
            chains,
            write_gate: Arc::new(Mutex::new(())),
        }
    }
}

/// GET /dishes
pub async fn list_dishes(State(state): State<DishAppState>) -> ApiResult<Json<DataBody<Vec<Dish>>>> {
    Ok(Json(DataBody::new(state.store.list()?)))
}

/// POST /dishes
pub async fn create_dish(
    State(state): State<DishAppState>,
    envelope: DataEnvelope,
) -> ApiResult<(StatusCode, Json<DataBody<Dish>>)> {
    let mut ctx = RequestContext::new(envelope.into_payload());
    state.chains.create.run(&mut ctx)?;

    let dish = DishFields::from_payload(ctx.into_payload())?.into_dish(next_id());
    let dish = state.store.insert(dish)?;
    tracing::info!(dish_id = %dish.id, "dish created");

    Ok((StatusCode::CREATED, Json(DataBody::new(dish))))
}

/// GET /dishes/{dish_id}
pub async fn get_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
) -> ApiResult<Json<DataBody<Dish>>> {
    let mut ctx = RequestContext::for_route(dish_id, Payload::default());
    state.chains.read.run(&mut ctx)?;

    let (_, dish) = ctx.into_resolved()?;
    Ok(Json(DataBody::new(dish)))
}

/// PUT /dishes/{dish_id}
pub async fn update_dish(
    State(state): State<DishAppState>,
    Path(dish_id): Path<String>,
    envelope: DataEnvelope,
) -> ApiResult<Json<DataBody<Dish>>> {
    let _gate = state.write_gate.lock().await;
    let mut ctx = RequestContext::for_route(dish_id, envelope.into_payload());
    state.chains.update.run(&mut ctx)?;

    let (payload, mut dish) = ctx.into_resolved()?;
    DishFields::from_payload(payload)?.apply_to(&mut dish);

    state
        .store
        .replace(dish.clone())?
        .ok_or_else(|| Dish::not_found(&dish.id))?;
    tracing::info!(dish_id = %dish.id, "dish updated");

    Ok(Json(DataBody::new(dish)))
}
