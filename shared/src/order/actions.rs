//! Status -> legal-action table
//!
//! The single normative copy of the transition table. Every surface
//! (engine validation, API action listings, UI dropdowns) consumes this
//! function; nothing else in the system branches on status to decide
//! what an order may do next.

use super::types::{OrderStatus, OrderType};

/// Legal next statuses for an order in `status` with fulfillment `order_type`.
///
/// Slices are ordered: the progression action comes first, `Cancelled`
/// last, so presentation layers can default to the first entry. Terminal
/// statuses return the empty slice. `Refunded` never appears as a target;
/// it is reachable only via out-of-band reconciliation.
pub fn available_actions(status: OrderStatus, order_type: OrderType) -> &'static [OrderStatus] {
    use OrderStatus::*;
    match (status, order_type) {
        (Pending, _) => &[Confirmed, Cancelled],
        (Confirmed, _) => &[Preparing, Cancelled],
        (Preparing, _) => &[Ready, Cancelled],
        // Cancellation window closes once the order is ready
        (Ready, OrderType::Delivery) => &[InDelivery],
        (Ready, OrderType::Pickup | OrderType::DineIn) => &[Delivered],
        (InDelivery, OrderType::Delivery) => &[Delivered],
        // in_delivery is unreachable for pickup/dine_in, but the table
        // stays total so a corrupted row cannot panic the resolver
        (InDelivery, OrderType::Pickup | OrderType::DineIn) => &[],
        (Delivered | Cancelled | Refunded, _) => &[],
    }
}
