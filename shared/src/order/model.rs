//! Order aggregate and audit ledger record

use super::types::{Customer, OrderStatus, OrderType, PaymentMethod};
use serde::{Deserialize, Serialize};

/// Order - the aggregate root
///
/// The row is a projection of the ledger tip: `status` always equals the
/// status of the highest-`seq` history entry for this order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order ID (assigned by server)
    pub id: String,
    /// Human-facing number, unique per shop
    pub order_number: String,
    /// Owning shop
    pub shop_id: String,
    /// Customer contact info
    pub customer: Customer,
    /// Fulfillment type - immutable after creation
    pub order_type: OrderType,
    /// Current lifecycle status
    pub status: OrderStatus,
    /// Payment method chosen at placement
    pub payment_method: PaymentMethod,
    /// Settlement state owned by an external system (opaque here)
    pub payment_status: String,
    /// Sum of item line totals
    pub subtotal: f64,
    /// Delivery fee (0 for pickup / dine-in)
    pub delivery_fee: f64,
    /// Discount amount
    pub discount_amount: f64,
    /// total == subtotal + delivery_fee - discount_amount
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: i64,
    /// Last committed transition timestamp (Unix milliseconds)
    pub updated_at: i64,
    /// Optimistic concurrency counter, bumped on every committed transition
    pub version: u64,
}

/// Order line item - immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    /// quantity * unit_price (addons included)
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub addons: Vec<OrderAddon>,
}

/// Addon attached to a line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderAddon {
    pub addon_name: String,
    pub quantity: i32,
}

/// Status history entry - immutable audit record
///
/// Entries are append-only; `seq` is the per-order sequence number and
/// the AUTHORITATIVE ordering mechanism (timestamps may collide).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    /// Entry unique ID
    pub id: String,
    /// Order this entry belongs to
    pub order_id: String,
    /// Per-order sequence number, starts at 1
    pub seq: u64,
    /// Status the order entered
    pub status: OrderStatus,
    /// Free-text note from the triggering request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Opaque id of the triggering party
    pub actor: String,
    /// Server timestamp (Unix milliseconds)
    pub created_at: i64,
}

impl StatusHistoryEntry {
    /// Create a new entry with a fresh id and server timestamp
    pub fn new(
        order_id: String,
        seq: u64,
        status: OrderStatus,
        actor: String,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            order_id,
            seq,
            status,
            notes,
            actor,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Placement request - everything needed to create an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    pub shop_id: String,
    pub customer: Customer,
    pub order_type: OrderType,
    pub payment_method: PaymentMethod,
    pub items: Vec<NewOrderItem>,
    pub subtotal: f64,
    #[serde(default)]
    pub delivery_fee: f64,
    #[serde(default)]
    pub discount_amount: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_instructions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Opaque id of the placing party (audit trail)
    pub actor_id: String,
}

/// Line item within a placement request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub total_price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub addons: Vec<OrderAddon>,
}
