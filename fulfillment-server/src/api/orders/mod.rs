//! Order API Module
//!
//! Placement, reads and the single write command (`transition`). All
//! mutations go through the TransitionEngine.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new()
        .nest("/api/orders", routes())
        .nest("/api/shops", shop_routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        // Place a new order
        .route("/", post(handler::place_order))
        // Order detail: order + items + ledger
        .route("/{id}", get(handler::get_by_id))
        // Ledger only
        .route("/{id}/history", get(handler::get_history))
        // Legal next statuses (UI dropdown source)
        .route("/{id}/actions", get(handler::get_actions))
        // The write command
        .route("/{id}/transition", post(handler::transition))
}

fn shop_routes() -> Router<ServerState> {
    Router::new().route("/{shop_id}/orders", get(handler::list_shop_orders))
}
