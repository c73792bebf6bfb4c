//! Order HTTP handlers

use super::model::{Order, OrderFields};
use super::validation::OrderChains;
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

/// Order-specific AppState
///
/// `write_gate` is held from the start of a mutating chain until its write
/// lands, so the guards always judge the state that gets written over.
#[derive(Clone)]
pub struct OrderAppState {
    pub store: Arc<dyn CollectionStore<Order>>,
    pub chains: Arc<OrderChains>,
    pub write_gate: Arc<Mutex<()>>,
}

impl OrderAppState {
    pub fn new(store: Arc<dyn CollectionStore<Order>>) -> Self {
        let chains = Arc::new(OrderChains::new(store.clone()));
        Self {
            store,
            chains,
            write_gate: Arc::new(Mutex::new(())),
        }
    }
}

/// GET /orders
pub async fn list_orders(
    State(state): State<OrderAppState>,
) -> ApiResult<Json<DataBody<Vec<Order>>>> {
    Ok(Json(DataBody::new(state.store.list()?)))
}

/// POST /orders
pub async fn create_order(
    State(state): State<OrderAppState>,
    envelope: DataEnvelope,
) -> ApiResult<(StatusCode, Json<DataBody<Order>>)> {
    let mut ctx = RequestContext::new(envelope.into_payload());
    state.chains.create.run(&mut ctx)?;

    let order = OrderFields::from_payload(ctx.into_payload())?.into_order(next_id());
    let order = state.store.insert(order)?;
    tracing::info!(order_id = %order.id, status = %order.status, "order created");

    Ok((StatusCode::CREATED, Json(DataBody::new(order))))
}

/// GET /orders/{order_id}
pub async fn get_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<Json<DataBody<Order>>> {
    let mut ctx = RequestContext::for_route(order_id, Payload::default());
    state.chains.read.run(&mut ctx)?;

    let (_, order) = ctx.into_resolved()?;
    Ok(Json(DataBody::new(order)))
}

/// PUT /orders/{order_id}
pub async fn update_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
    envelope: DataEnvelope,
) -> ApiResult<Json<DataBody<Order>>> {
    let _gate = state.write_gate.lock().await;
    let mut ctx = RequestContext::for_route(order_id, envelope.into_payload());
    state.chains.update.run(&mut ctx)?;

    let (payload, mut order) = ctx.into_resolved()?;
    OrderFields::from_payload(payload)?.apply_to(&mut order);

    state
        .store
        .replace(order.clone())?
        .ok_or_else(|| Order::not_found(&order.id))?;
    tracing::info!(order_id = %order.id, status = %order.status, "order updated");

    Ok(Json(DataBody::new(order)))
}

/// DELETE /orders/{order_id}
pub async fn delete_order(
    State(state): State<OrderAppState>,
    Path(order_id): Path<String>,
) -> ApiResult<StatusCode> {
    let _gate = state.write_gate.lock().await;
    let mut ctx = RequestContext::for_route(order_id, Payload::default());
    state.chains.delete.run(&mut ctx)?;

    let (_, order) = ctx.into_resolved()?;
    state.store.remove(&order.id)?;
    tracing::info!(order_id = %order.id, "order deleted");

    Ok(StatusCode::NO_CONTENT)
}
