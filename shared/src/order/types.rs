//! Order enums and commands - the wire contract
//!
//! Every enum here serializes as lowercase `snake_case` strings. These
//! names are persisted and exchanged with clients; renaming a variant is
//! a wire-breaking change.

use serde::{Deserialize, Serialize};

/// Order lifecycle status
///
/// `Delivered`, `Cancelled` and `Refunded` are terminal: no transition
/// leaves them. `Refunded` is additionally never a transition target of
/// the engine; it is written only by out-of-band reconciliation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    InDelivery,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    /// Terminal statuses admit no further transitions
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Refunded
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Confirmed => write!(f, "confirmed"),
            OrderStatus::Preparing => write!(f, "preparing"),
            OrderStatus::Ready => write!(f, "ready"),
            OrderStatus::InDelivery => write!(f, "in_delivery"),
            OrderStatus::Delivered => write!(f, "delivered"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
            OrderStatus::Refunded => write!(f, "refunded"),
        }
    }
}

/// Fulfillment type - immutable after creation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Delivery,
    Pickup,
    DineIn,
}

impl OrderType {
    /// Whether fulfillment passes through the courier hand-off step
    pub fn requires_delivery(&self) -> bool {
        matches!(self, OrderType::Delivery)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Delivery => write!(f, "delivery"),
            OrderType::Pickup => write!(f, "pickup"),
            OrderType::DineIn => write!(f, "dine_in"),
        }
    }
}

/// Payment method chosen at placement
///
/// Settlement itself is owned by an external system; the fulfillment
/// engine only records the choice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Transfer,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Cash => write!(f, "cash"),
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::Transfer => write!(f, "transfer"),
        }
    }
}

/// Customer contact info captured at placement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Transition command - a request to move an order to a new status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionRequest {
    /// Order to transition
    pub order_id: String,
    /// Requested destination status
    pub target_status: OrderStatus,
    /// Opaque id of the party triggering the change (audit trail)
    pub actor_id: String,
    /// Free-text note recorded on the ledger entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Client-supplied idempotency token
    ///
    /// Redelivering a request with an already-processed token returns the
    /// originally recorded outcome instead of re-evaluating stale intent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}
