//! TransitionEngine - the order fulfillment state machine
//!
//! # Transition flow
//!
//! ```text
//! request_transition(req)
//!     ├─ 1. Idempotency check (request_id)
//!     ├─ 2. Load order (NotFound)
//!     ├─ 3. Legality check against the action table (InvalidTransition)
//!     ├─ 4. Amount validation (InvalidAmount)
//!     ├─ 5. Atomic commit: order row + ledger entry, CAS on version (Conflict)
//!     └─ 6. Return updated order and the recorded entry
//! ```
//!
//! The engine has no side effects beyond the store write. Cache
//! invalidation and customer notifications belong to the caller.

use serde::Serialize;
use shared::order::{
    available_actions, NewOrder, Order, OrderItem, OrderStatus, OrderType, StatusHistoryEntry,
    TransitionRequest,
};
use thiserror::Error;

use super::store::{OrderStore, StoreError};
use super::validator;

/// Transition errors
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error("Cannot transition from {current} to {requested}")]
    InvalidTransition {
        current: OrderStatus,
        requested: OrderStatus,
        allowed: Vec<OrderStatus>,
    },

    #[error("Order {0} was modified concurrently")]
    Conflict(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}

pub type TransitionResult<T> = Result<T, TransitionError>;

/// Full read surface of one order
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetail {
    pub order: Order,
    pub items: Vec<OrderItem>,
    pub status_history: Vec<StatusHistoryEntry>,
}

/// Legal next statuses of an order, for presentation layers
#[derive(Debug, Clone, Serialize)]
pub struct OrderActions {
    pub order_id: String,
    pub current_status: OrderStatus,
    pub order_type: OrderType,
    /// Ordered: progression action first, cancellation last
    pub available_actions: Vec<OrderStatus>,
}

/// Order fulfillment engine over an [`OrderStore`]
pub struct TransitionEngine<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> TransitionEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Place a new order: validate amounts and items, allocate the shop's
    /// next order number, write the order and its `pending` ledger entry
    /// in one transaction.
    pub fn place_order(&self, req: NewOrder) -> TransitionResult<(Order, StatusHistoryEntry)> {
        validator::validate_new_order(&req)?;

        let number = self.store.next_order_number(&req.shop_id)?;
        let now = chrono::Utc::now().timestamp_millis();
        let order = Order {
            id: uuid::Uuid::new_v4().to_string(),
            order_number: format!("ORD-{:04}", number),
            shop_id: req.shop_id,
            customer: req.customer,
            order_type: req.order_type,
            status: OrderStatus::Pending,
            payment_method: req.payment_method,
            payment_status: "unpaid".to_string(),
            subtotal: req.subtotal,
            delivery_fee: req.delivery_fee,
            discount_amount: req.discount_amount,
            total: req.total,
            delivery_address: req.delivery_address,
            delivery_instructions: req.delivery_instructions,
            notes: req.notes,
            created_at: now,
            updated_at: now,
            version: 0,
        };
        let items: Vec<OrderItem> = req
            .items
            .into_iter()
            .map(|i| OrderItem {
                product_name: i.product_name,
                quantity: i.quantity,
                unit_price: i.unit_price,
                total_price: i.total_price,
                notes: i.notes,
                addons: i.addons,
            })
            .collect();
        let entry = StatusHistoryEntry::new(
            order.id.clone(),
            1,
            OrderStatus::Pending,
            req.actor_id,
            None,
        );

        self.store.create_order(&order, &items, &entry)?;
        tracing::info!(
            order_id = %order.id,
            shop_id = %order.shop_id,
            order_number = %order.order_number,
            "Order placed"
        );
        Ok((order, entry))
    }

    /// Request a status transition. Returns the updated order together
    /// with the appended ledger entry, or the recorded outcome when the
    /// request id was already processed.
    pub fn request_transition(
        &self,
        req: TransitionRequest,
    ) -> TransitionResult<(Order, StatusHistoryEntry)> {
        // Redelivered request: return what was recorded, do not re-validate
        // stale intent against the current state
        if let Some(ref rid) = req.request_id
            && let Some(entry) = self.store.find_processed_request(rid)?
        {
            let order = self
                .store
                .get_order(&entry.order_id)?
                .ok_or_else(|| TransitionError::NotFound(entry.order_id.clone()))?;
            tracing::debug!(
                request_id = %rid,
                order_id = %order.id,
                "Duplicate request, returning recorded outcome"
            );
            return Ok((order, entry));
        }

        let order = self
            .store
            .get_order(&req.order_id)?
            .ok_or_else(|| TransitionError::NotFound(req.order_id.clone()))?;

        let allowed = available_actions(order.status, order.order_type);
        if !allowed.contains(&req.target_status) {
            return Err(TransitionError::InvalidTransition {
                current: order.status,
                requested: req.target_status,
                allowed: allowed.to_vec(),
            });
        }

        validator::validate_order_amounts(&order)?;

        let expected_version = order.version;
        let mut updated = order;
        updated.status = req.target_status;
        updated.updated_at = chrono::Utc::now().timestamp_millis();
        updated.version = expected_version + 1;

        // Creation writes seq 1 at version 0, so seq stays version + 1
        let entry = StatusHistoryEntry::new(
            updated.id.clone(),
            updated.version + 1,
            req.target_status,
            req.actor_id,
            req.notes,
        );

        match self
            .store
            .commit_transition(&updated, expected_version, &entry, req.request_id.as_deref())
        {
            Ok(()) => {
                tracing::info!(
                    order_id = %updated.id,
                    status = %updated.status,
                    version = updated.version,
                    "Transition committed"
                );
                Ok((updated, entry))
            }
            Err(StoreError::VersionConflict { order_id, .. }) => {
                tracing::warn!(order_id = %order_id, "Concurrent transition lost the race");
                Err(TransitionError::Conflict(order_id))
            }
            Err(StoreError::OrderNotFound(id)) => Err(TransitionError::NotFound(id)),
            Err(e) => Err(e.into()),
        }
    }

    /// Load an order by id
    pub fn get_order(&self, order_id: &str) -> TransitionResult<Order> {
        self.store
            .get_order(order_id)?
            .ok_or_else(|| TransitionError::NotFound(order_id.to_string()))
    }

    /// Load an order with its items and full ledger
    pub fn get_order_detail(&self, order_id: &str) -> TransitionResult<OrderDetail> {
        let order = self.get_order(order_id)?;
        let items = self.store.get_items(order_id)?;
        let status_history = self.store.get_history(order_id)?;
        Ok(OrderDetail {
            order,
            items,
            status_history,
        })
    }

    /// Load the ledger of an order, ascending by seq
    pub fn get_history(&self, order_id: &str) -> TransitionResult<Vec<StatusHistoryEntry>> {
        // Existence check keeps a missing order distinct from an empty ledger
        self.get_order(order_id)?;
        Ok(self.store.get_history(order_id)?)
    }

    /// Legal next statuses of an order
    pub fn get_actions(&self, order_id: &str) -> TransitionResult<OrderActions> {
        let order = self.get_order(order_id)?;
        Ok(OrderActions {
            available_actions: available_actions(order.status, order.order_type).to_vec(),
            order_id: order.id,
            current_status: order.status,
            order_type: order.order_type,
        })
    }

    /// All orders of a shop
    pub fn list_shop_orders(&self, shop_id: &str) -> TransitionResult<Vec<Order>> {
        Ok(self.store.list_shop_orders(shop_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::storage::RedbOrderStore;
    use shared::order::{Customer, NewOrderItem, PaymentMethod};
    use std::sync::Arc;

    fn create_test_engine() -> (TransitionEngine<RedbOrderStore>, RedbOrderStore) {
        let store = RedbOrderStore::open_in_memory().unwrap();
        (TransitionEngine::new(store.clone()), store)
    }

    fn simple_item() -> NewOrderItem {
        NewOrderItem {
            product_name: "Margherita".to_string(),
            quantity: 2,
            unit_price: 5.0,
            total_price: 10.0,
            notes: None,
            addons: vec![],
        }
    }

    fn new_order(order_type: OrderType) -> NewOrder {
        let delivery_fee = if order_type == OrderType::Delivery {
            2.5
        } else {
            0.0
        };
        NewOrder {
            shop_id: "shop-1".to_string(),
            customer: Customer {
                name: "Ana".to_string(),
                phone: "+34600000001".to_string(),
                email: Some("ana@example.com".to_string()),
            },
            order_type,
            payment_method: PaymentMethod::Card,
            items: vec![simple_item()],
            subtotal: 10.0,
            delivery_fee,
            discount_amount: 0.0,
            total: 10.0 + delivery_fee,
            delivery_address: (order_type == OrderType::Delivery)
                .then(|| "Calle Mayor 1".to_string()),
            delivery_instructions: None,
            notes: None,
            actor_id: "customer-1".to_string(),
        }
    }

    fn transition(order_id: &str, target: OrderStatus) -> TransitionRequest {
        TransitionRequest {
            order_id: order_id.to_string(),
            target_status: target,
            actor_id: "shop-staff-1".to_string(),
            notes: None,
            request_id: None,
        }
    }

    /// Drive an order through the given statuses
    fn advance(
        engine: &TransitionEngine<RedbOrderStore>,
        order_id: &str,
        statuses: &[OrderStatus],
    ) -> Order {
        let mut last = engine.get_order(order_id).unwrap();
        for &status in statuses {
            let (order, _) = engine.request_transition(transition(order_id, status)).unwrap();
            last = order;
        }
        last
    }

    // ========== Placement ==========

    #[test]
    fn test_place_order_creates_pending_with_single_entry() {
        let (engine, _store) = create_test_engine();
        let (order, entry) = engine.place_order(new_order(OrderType::Pickup)).unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.version, 0);
        assert_eq!(order.order_number, "ORD-0001");
        assert_eq!(entry.seq, 1);
        assert_eq!(entry.status, OrderStatus::Pending);

        let detail = engine.get_order_detail(&order.id).unwrap();
        assert_eq!(detail.items.len(), 1);
        assert_eq!(detail.status_history.len(), 1);
        assert_eq!(detail.status_history[0].id, entry.id);
    }

    #[test]
    fn test_place_order_rejects_bad_amounts() {
        let (engine, _store) = create_test_engine();
        let mut req = new_order(OrderType::Pickup);
        req.total = 99.0;
        let err = engine.place_order(req).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidAmount(_)));
    }

    #[test]
    fn test_order_numbers_increment_per_shop() {
        let (engine, _store) = create_test_engine();
        let (first, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        let (second, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        assert_eq!(first.order_number, "ORD-0001");
        assert_eq!(second.order_number, "ORD-0002");

        let mut other_shop = new_order(OrderType::Pickup);
        other_shop.shop_id = "shop-2".to_string();
        let (third, _) = engine.place_order(other_shop).unwrap();
        assert_eq!(third.order_number, "ORD-0001");
    }

    // ========== Happy paths ==========

    #[test]
    fn test_pickup_full_lifecycle() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();

        use OrderStatus::*;
        let final_order = advance(&engine, &order.id, &[Confirmed, Preparing, Ready, Delivered]);
        assert_eq!(final_order.status, Delivered);
        assert_eq!(final_order.version, 4);

        let history = engine.get_history(&order.id).unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(
            history.iter().map(|e| e.status).collect::<Vec<_>>(),
            vec![Pending, Confirmed, Preparing, Ready, Delivered]
        );
    }

    #[test]
    fn test_delivery_full_lifecycle() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Delivery)).unwrap();

        use OrderStatus::*;
        let final_order = advance(
            &engine,
            &order.id,
            &[Confirmed, Preparing, Ready, InDelivery, Delivered],
        );
        assert_eq!(final_order.status, Delivered);
        assert_eq!(final_order.version, 5);
    }

    #[test]
    fn test_ready_pickup_delivers_directly() {
        // A ready pickup order hands over without a courier leg
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        use OrderStatus::*;
        advance(&engine, &order.id, &[Confirmed, Preparing, Ready]);

        let (updated, entry) = engine
            .request_transition(transition(&order.id, Delivered))
            .unwrap();
        assert_eq!(updated.status, Delivered);
        assert_eq!(entry.status, Delivered);
    }

    // ========== Rejections ==========

    #[test]
    fn test_ready_delivery_requires_courier_handoff() {
        // A ready delivery order must pass through in_delivery
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Delivery)).unwrap();
        use OrderStatus::*;
        advance(&engine, &order.id, &[Confirmed, Preparing, Ready]);

        let err = engine
            .request_transition(transition(&order.id, Delivered))
            .unwrap_err();
        match err {
            TransitionError::InvalidTransition {
                current,
                requested,
                allowed,
            } => {
                assert_eq!(current, Ready);
                assert_eq!(requested, Delivered);
                assert_eq!(allowed, vec![InDelivery]);
            }
            other => panic!("expected InvalidTransition, got {:?}", other),
        }

        // Nothing was written
        let loaded = engine.get_order(&order.id).unwrap();
        assert_eq!(loaded.status, Ready);
        assert_eq!(loaded.version, 3);
        assert_eq!(engine.get_history(&order.id).unwrap().len(), 4);
    }

    #[test]
    fn test_skipping_steps_rejected() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();

        use OrderStatus::*;
        for target in [Preparing, Ready, Delivered] {
            let err = engine
                .request_transition(transition(&order.id, target))
                .unwrap_err();
            assert!(matches!(err, TransitionError::InvalidTransition { .. }));
        }
    }

    #[test]
    fn test_transition_is_not_idempotent() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        use OrderStatus::*;
        advance(&engine, &order.id, &[Confirmed]);

        // Re-requesting the current status is an error, not a no-op
        let err = engine
            .request_transition(transition(&order.id, Confirmed))
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    }

    #[test]
    fn test_cancellation_window() {
        use OrderStatus::*;
        let (engine, _store) = create_test_engine();

        // Cancellable from pending, confirmed and preparing
        for steps in [
            &[][..],
            &[Confirmed][..],
            &[Confirmed, Preparing][..],
        ] {
            let (order, _) = engine.place_order(new_order(OrderType::Delivery)).unwrap();
            advance(&engine, &order.id, steps);
            let (updated, _) = engine
                .request_transition(transition(&order.id, Cancelled))
                .unwrap();
            assert_eq!(updated.status, Cancelled);
        }

        // Window closes at ready
        let (order, _) = engine.place_order(new_order(OrderType::Delivery)).unwrap();
        advance(&engine, &order.id, &[Confirmed, Preparing, Ready]);
        let err = engine
            .request_transition(transition(&order.id, Cancelled))
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidTransition { .. }));
    }

    #[test]
    fn test_terminal_states_reject_every_target() {
        use OrderStatus::*;
        let all_targets = [
            Pending, Confirmed, Preparing, Ready, InDelivery, Delivered, Cancelled, Refunded,
        ];
        let (engine, store) = create_test_engine();

        // Delivered and cancelled via the engine
        let (delivered, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        advance(&engine, &delivered.id, &[Confirmed, Preparing, Ready, Delivered]);
        let (cancelled, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        advance(&engine, &cancelled.id, &[Cancelled]);

        // Refunded only exists through out-of-band reconciliation
        let (refunded, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        advance(&engine, &refunded.id, &[Cancelled]);
        let mut row = engine.get_order(&refunded.id).unwrap();
        let expected = row.version;
        row.status = Refunded;
        row.version += 1;
        let entry = StatusHistoryEntry::new(
            row.id.clone(),
            row.version + 1,
            Refunded,
            "reconciliation".to_string(),
            None,
        );
        store.commit_transition(&row, expected, &entry, None).unwrap();

        for order_id in [&delivered.id, &cancelled.id, &refunded.id] {
            for target in all_targets {
                let err = engine
                    .request_transition(transition(order_id, target))
                    .unwrap_err();
                match err {
                    TransitionError::InvalidTransition { allowed, .. } => {
                        assert!(allowed.is_empty())
                    }
                    other => panic!("expected InvalidTransition, got {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_unknown_order_not_found() {
        let (engine, _store) = create_test_engine();
        let err = engine
            .request_transition(transition("missing", OrderStatus::Confirmed))
            .unwrap_err();
        assert!(matches!(err, TransitionError::NotFound(_)));
        assert!(matches!(
            engine.get_order_detail("missing").unwrap_err(),
            TransitionError::NotFound(_)
        ));
        assert!(matches!(
            engine.get_history("missing").unwrap_err(),
            TransitionError::NotFound(_)
        ));
    }

    #[test]
    fn test_corrupted_amounts_block_transitions() {
        // A stored order violating the amount invariant cannot move
        let (engine, store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();

        let mut tampered = engine.get_order(&order.id).unwrap();
        let expected = tampered.version;
        tampered.total = 999.0;
        tampered.version += 1;
        let entry = StatusHistoryEntry::new(
            tampered.id.clone(),
            tampered.version + 1,
            tampered.status,
            "tamper".to_string(),
            None,
        );
        store
            .commit_transition(&tampered, expected, &entry, None)
            .unwrap();

        let err = engine
            .request_transition(transition(&order.id, OrderStatus::Confirmed))
            .unwrap_err();
        assert!(matches!(err, TransitionError::InvalidAmount(_)));
    }

    // ========== Concurrency ==========

    #[test]
    fn test_concurrent_transitions_have_single_winner() {
        // Both writers request the same target, so the assertion holds under
        // every schedule: the loser either fails the version check at commit
        // (loaded before the winner committed) or finds the transition
        // illegal (loaded after, confirmed -> confirmed is not in the table).
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();
        let engine = Arc::new(engine);

        let mut handles = Vec::new();
        for _ in 0..2 {
            let engine = Arc::clone(&engine);
            let order_id = order.id.clone();
            handles.push(std::thread::spawn(move || {
                engine.request_transition(transition(&order_id, OrderStatus::Confirmed))
            }));
        }
        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        let wins = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(wins, 1);
        // Never a silent lost update
        for result in &results {
            if let Err(e) = result {
                assert!(matches!(
                    e,
                    TransitionError::Conflict(_) | TransitionError::InvalidTransition { .. }
                ));
            }
        }

        let loaded = engine.get_order(&order.id).unwrap();
        assert_eq!(loaded.status, OrderStatus::Confirmed);
        assert_eq!(loaded.version, 1);
        assert_eq!(engine.get_history(&order.id).unwrap().len(), 2);
    }

    #[test]
    fn test_sequential_writers_both_commit_legal_steps() {
        // A second writer issuing a different legal step after the first
        // commit is not a conflict. Both land on the ledger in order.
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();

        engine
            .request_transition(transition(&order.id, OrderStatus::Confirmed))
            .unwrap();
        engine
            .request_transition(transition(&order.id, OrderStatus::Cancelled))
            .unwrap();

        let loaded = engine.get_order(&order.id).unwrap();
        assert_eq!(loaded.status, OrderStatus::Cancelled);
        assert_eq!(loaded.version, 2);
        assert_eq!(
            engine
                .get_history(&order.id)
                .unwrap()
                .iter()
                .map(|e| e.status)
                .collect::<Vec<_>>(),
            vec![
                OrderStatus::Pending,
                OrderStatus::Confirmed,
                OrderStatus::Cancelled
            ]
        );
    }

    // ========== Idempotency tokens ==========

    #[test]
    fn test_request_id_redelivery_returns_recorded_outcome() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();

        let mut req = transition(&order.id, OrderStatus::Confirmed);
        req.request_id = Some("req-abc".to_string());
        let (_, first_entry) = engine.request_transition(req.clone()).unwrap();

        // Same token again: the target is now illegal, but the recorded
        // outcome is returned and no second entry is appended
        let (current, entry) = engine.request_transition(req).unwrap();
        assert_eq!(entry.id, first_entry.id);
        assert_eq!(current.status, OrderStatus::Confirmed);
        assert_eq!(engine.get_history(&order.id).unwrap().len(), 2);
    }

    #[test]
    fn test_failed_request_does_not_consume_token() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Pickup)).unwrap();

        let mut req = transition(&order.id, OrderStatus::Ready);
        req.request_id = Some("req-bad".to_string());
        assert!(engine.request_transition(req).is_err());

        // The token was never recorded, so a corrected retry succeeds
        let mut req = transition(&order.id, OrderStatus::Confirmed);
        req.request_id = Some("req-bad".to_string());
        let (updated, _) = engine.request_transition(req).unwrap();
        assert_eq!(updated.status, OrderStatus::Confirmed);
    }

    // ========== Ledger and projections ==========

    #[test]
    fn test_order_row_is_projection_of_ledger_tip() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Delivery)).unwrap();

        use OrderStatus::*;
        for target in [Confirmed, Preparing, Ready, InDelivery, Delivered] {
            engine
                .request_transition(transition(&order.id, target))
                .unwrap();
            let loaded = engine.get_order(&order.id).unwrap();
            let history = engine.get_history(&order.id).unwrap();
            assert_eq!(history.last().unwrap().status, loaded.status);
            assert!(history.windows(2).all(|w| w[0].seq < w[1].seq));
        }
    }

    #[test]
    fn test_get_actions() {
        let (engine, _store) = create_test_engine();
        let (order, _) = engine.place_order(new_order(OrderType::Delivery)).unwrap();

        let actions = engine.get_actions(&order.id).unwrap();
        assert_eq!(actions.current_status, OrderStatus::Pending);
        assert_eq!(
            actions.available_actions,
            vec![OrderStatus::Confirmed, OrderStatus::Cancelled]
        );

        advance(&engine, &order.id, &[OrderStatus::Confirmed]);
        let actions = engine.get_actions(&order.id).unwrap();
        assert_eq!(
            actions.available_actions,
            vec![OrderStatus::Preparing, OrderStatus::Cancelled]
        );
    }

    #[test]
    fn test_list_shop_orders() {
        let (engine, _store) = create_test_engine();
        engine.place_order(new_order(OrderType::Pickup)).unwrap();
        engine.place_order(new_order(OrderType::Delivery)).unwrap();
        let mut other = new_order(OrderType::Pickup);
        other.shop_id = "shop-2".to_string();
        engine.place_order(other).unwrap();

        assert_eq!(engine.list_shop_orders("shop-1").unwrap().len(), 2);
        assert_eq!(engine.list_shop_orders("shop-2").unwrap().len(), 1);
        assert!(engine.list_shop_orders("shop-3").unwrap().is_empty());
    }
}
