//! Order Fulfillment Module
//!
//! Types for the order fulfillment state machine:
//! - Types: closed status/type/payment enums and the transition command
//! - Model: the order aggregate, its items, and the audit ledger record
//! - Actions: the single normative status -> legal-action table

pub mod actions;
pub mod model;
pub mod types;

// Re-exports
pub use actions::available_actions;
pub use model::{NewOrder, NewOrderItem, Order, OrderAddon, OrderItem, StatusHistoryEntry};
pub use types::{Customer, OrderStatus, OrderType, PaymentMethod, TransitionRequest};
