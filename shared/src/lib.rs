//! Shared types for the fulfillment platform
//!
//! Wire-stable domain types consumed by the fulfillment server and
//! every presentation surface: order model, status/type enums, the
//! transition command, and the normative status -> action table.

pub mod order;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use order::{
    available_actions, Customer, NewOrder, NewOrderItem, Order, OrderAddon, OrderItem,
    OrderStatus, OrderType, PaymentMethod, StatusHistoryEntry, TransitionRequest,
};
