//! Persistence interface consumed by the transition engine
//!
//! The engine never touches a concrete database: everything it needs is
//! expressed here. `RedbOrderStore` in [`super::storage`] is the embedded
//! implementation.

use shared::order::{Order, OrderItem, StatusHistoryEntry};
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Version conflict on order {order_id}: expected {expected}, found {actual}")]
    VersionConflict {
        order_id: String,
        expected: u64,
        actual: u64,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence operations for orders and their audit ledger
pub trait OrderStore: Send + Sync {
    /// Write a new order, its items and the initial ledger entry atomically
    fn create_order(
        &self,
        order: &Order,
        items: &[OrderItem],
        entry: &StatusHistoryEntry,
    ) -> StoreResult<()>;

    /// Load an order by id
    fn get_order(&self, order_id: &str) -> StoreResult<Option<Order>>;

    /// Load the items of an order
    fn get_items(&self, order_id: &str) -> StoreResult<Vec<OrderItem>>;

    /// Load the full ledger of an order, ascending by `seq`
    fn get_history(&self, order_id: &str) -> StoreResult<Vec<StatusHistoryEntry>>;

    /// Commit a transition atomically: replace the order row and append
    /// the ledger entry, conditioned on the stored version still being
    /// `expected_version`. A stale version yields
    /// [`StoreError::VersionConflict`] and nothing is written. When
    /// `request_id` is given it is recorded in the same transaction.
    fn commit_transition(
        &self,
        updated: &Order,
        expected_version: u64,
        entry: &StatusHistoryEntry,
        request_id: Option<&str>,
    ) -> StoreResult<()>;

    /// Look up the ledger entry recorded for a processed request id
    fn find_processed_request(&self, request_id: &str) -> StoreResult<Option<StatusHistoryEntry>>;

    /// Allocate the next order number for a shop (crash-safe counter)
    fn next_order_number(&self, shop_id: &str) -> StoreResult<u64>;

    /// List all orders belonging to a shop
    fn list_shop_orders(&self, shop_id: &str) -> StoreResult<Vec<Order>>;
}
