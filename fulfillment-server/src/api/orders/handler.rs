//! Order API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::orders::{OrderActions, OrderDetail};
use crate::utils::{ok, AppError, AppResponse, AppResult};
use shared::order::{
    NewOrder, Order, OrderStatus, StatusHistoryEntry, TransitionRequest,
};

/// Transition command body (order id comes from the path)
#[derive(Debug, Deserialize)]
pub struct TransitionBody {
    pub target_status: OrderStatus,
    pub actor_id: String,
    #[serde(default)]
    pub notes: Option<String>,
    /// Client idempotency token; redelivery returns the recorded outcome
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Result of a committed (or replayed) transition
#[derive(Debug, Serialize)]
pub struct TransitionResponse {
    pub order: Order,
    pub history_entry: StatusHistoryEntry,
}

/// Place a new order
pub async fn place_order(
    State(state): State<ServerState>,
    Json(payload): Json<NewOrder>,
) -> AppResult<Json<AppResponse<TransitionResponse>>> {
    if payload.order_type.requires_delivery() && payload.delivery_address.is_none() {
        return Err(AppError::Validation(
            "delivery orders require a delivery address".to_string(),
        ));
    }
    let (order, history_entry) = state.engine.place_order(payload)?;
    Ok(ok(TransitionResponse {
        order,
        history_entry,
    }))
}

/// Get order detail: order + items + ledger
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<OrderDetail>>> {
    let detail = state.engine.get_order_detail(&id)?;
    Ok(ok(detail))
}

/// Get the audit ledger of an order, ascending by seq
pub async fn get_history(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Vec<StatusHistoryEntry>>>> {
    let history = state.engine.get_history(&id)?;
    Ok(ok(history))
}

/// Get the legal next statuses of an order
pub async fn get_actions(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<OrderActions>>> {
    let actions = state.engine.get_actions(&id)?;
    Ok(ok(actions))
}

/// Request a status transition
pub async fn transition(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<TransitionBody>,
) -> AppResult<Json<AppResponse<TransitionResponse>>> {
    let request = TransitionRequest {
        order_id: id,
        target_status: payload.target_status,
        actor_id: payload.actor_id,
        notes: payload.notes,
        request_id: payload.request_id,
    };
    let (order, history_entry) = state.engine.request_transition(request)?;
    Ok(ok(TransitionResponse {
        order,
        history_entry,
    }))
}

/// List all orders of a shop
pub async fn list_shop_orders(
    State(state): State<ServerState>,
    Path(shop_id): Path<String>,
) -> AppResult<Json<AppResponse<Vec<Order>>>> {
    let orders = state.engine.list_shop_orders(&shop_id)?;
    Ok(ok(orders))
}
