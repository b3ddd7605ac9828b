//! redb-based order store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `order_id` | `Order` | Current order rows |
//! | `order_items` | `order_id` | `Vec<OrderItem>` | Line items (immutable) |
//! | `status_history` | `(order_id, seq)` | `StatusHistoryEntry` | Audit ledger (append-only) |
//! | `shop_orders` | `(shop_id, order_id)` | `()` | Per-shop index |
//! | `processed_requests` | `request_id` | `StatusHistoryEntry` | Idempotency records |
//! | `counters` | `shop_id` | `u64` | Per-shop order numbering |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `commit()` returns the
//! write is persistent and the file is in a consistent state. Optimistic
//! concurrency lives entirely inside the write transaction: the stored
//! version is re-read and compared before anything is written, so a stale
//! writer fails without leaving a partial commit behind.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use shared::order::{Order, OrderItem, StatusHistoryEntry};
use std::path::Path;
use std::sync::Arc;

use super::store::{OrderStore, StoreError, StoreResult};

/// Current order rows: key = order_id, value = JSON-serialized Order
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Line items: key = order_id, value = JSON-serialized Vec<OrderItem>
const ORDER_ITEMS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("order_items");

/// Audit ledger: key = (order_id, seq), value = JSON-serialized StatusHistoryEntry
const STATUS_HISTORY_TABLE: TableDefinition<(&str, u64), &[u8]> =
    TableDefinition::new("status_history");

/// Per-shop index: key = (shop_id, order_id), value = empty (existence check)
const SHOP_ORDERS_TABLE: TableDefinition<(&str, &str), ()> = TableDefinition::new("shop_orders");

/// Idempotency records: key = request_id, value = JSON-serialized StatusHistoryEntry
const PROCESSED_REQUESTS_TABLE: TableDefinition<&str, &[u8]> =
    TableDefinition::new("processed_requests");

/// Per-shop order numbering: key = shop_id, value = u64
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

/// Order store backed by redb
#[derive(Clone)]
pub struct RedbOrderStore {
    db: Arc<Database>,
}

impl RedbOrderStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let db = Database::create(path)?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        let store = Self { db: Arc::new(db) };
        store.init_tables()?;
        Ok(store)
    }

    /// Create all tables so first reads do not fail on missing tables
    fn init_tables(&self) -> StoreResult<()> {
        let write_txn = self.db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(ORDER_ITEMS_TABLE)?;
            let _ = write_txn.open_table(STATUS_HISTORY_TABLE)?;
            let _ = write_txn.open_table(SHOP_ORDERS_TABLE)?;
            let _ = write_txn.open_table(PROCESSED_REQUESTS_TABLE)?;
            let _ = write_txn.open_table(COUNTERS_TABLE)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

impl OrderStore for RedbOrderStore {
    fn create_order(
        &self,
        order: &Order,
        items: &[OrderItem],
        entry: &StatusHistoryEntry,
    ) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut orders = txn.open_table(ORDERS_TABLE)?;
            let value = serde_json::to_vec(order)?;
            orders.insert(order.id.as_str(), value.as_slice())?;
        }
        {
            let mut items_table = txn.open_table(ORDER_ITEMS_TABLE)?;
            let value = serde_json::to_vec(items)?;
            items_table.insert(order.id.as_str(), value.as_slice())?;
        }
        {
            let mut history = txn.open_table(STATUS_HISTORY_TABLE)?;
            let value = serde_json::to_vec(entry)?;
            history.insert((order.id.as_str(), entry.seq), value.as_slice())?;
        }
        {
            let mut shop_index = txn.open_table(SHOP_ORDERS_TABLE)?;
            shop_index.insert((order.shop_id.as_str(), order.id.as_str()), ())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn get_order(&self, order_id: &str) -> StoreResult<Option<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        match table.get(order_id)? {
            Some(value) => {
                let order: Order = serde_json::from_slice(value.value())?;
                Ok(Some(order))
            }
            None => Ok(None),
        }
    }

    fn get_items(&self, order_id: &str) -> StoreResult<Vec<OrderItem>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDER_ITEMS_TABLE)?;
        match table.get(order_id)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(Vec::new()),
        }
    }

    fn get_history(&self, order_id: &str) -> StoreResult<Vec<StatusHistoryEntry>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(STATUS_HISTORY_TABLE)?;

        let mut entries = Vec::new();
        let range_start = (order_id, 0u64);
        let range_end = (order_id, u64::MAX);
        for result in table.range(range_start..=range_end)? {
            let (_key, value) = result?;
            let entry: StatusHistoryEntry = serde_json::from_slice(value.value())?;
            entries.push(entry);
        }

        // Key order already sorts by seq within one order_id
        Ok(entries)
    }

    fn commit_transition(
        &self,
        updated: &Order,
        expected_version: u64,
        entry: &StatusHistoryEntry,
        request_id: Option<&str>,
    ) -> StoreResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut orders = txn.open_table(ORDERS_TABLE)?;

            // Compare-and-swap: re-read under the write lock
            let current: Order = match orders.get(updated.id.as_str())? {
                Some(value) => serde_json::from_slice(value.value())?,
                None => return Err(StoreError::OrderNotFound(updated.id.clone())),
            };
            if current.version != expected_version {
                return Err(StoreError::VersionConflict {
                    order_id: updated.id.clone(),
                    expected: expected_version,
                    actual: current.version,
                });
            }

            let value = serde_json::to_vec(updated)?;
            orders.insert(updated.id.as_str(), value.as_slice())?;
        }
        {
            let mut history = txn.open_table(STATUS_HISTORY_TABLE)?;
            let value = serde_json::to_vec(entry)?;
            history.insert((updated.id.as_str(), entry.seq), value.as_slice())?;
        }
        if let Some(rid) = request_id {
            let mut processed = txn.open_table(PROCESSED_REQUESTS_TABLE)?;
            let value = serde_json::to_vec(entry)?;
            processed.insert(rid, value.as_slice())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn find_processed_request(&self, request_id: &str) -> StoreResult<Option<StatusHistoryEntry>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROCESSED_REQUESTS_TABLE)?;
        match table.get(request_id)? {
            Some(value) => {
                let entry: StatusHistoryEntry = serde_json::from_slice(value.value())?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    fn next_order_number(&self, shop_id: &str) -> StoreResult<u64> {
        let txn = self.db.begin_write()?;
        let next = {
            let mut table = txn.open_table(COUNTERS_TABLE)?;
            let current = table.get(shop_id)?.map(|g| g.value()).unwrap_or(0);
            let next = current + 1;
            table.insert(shop_id, next)?;
            next
        };
        txn.commit()?;
        Ok(next)
    }

    fn list_shop_orders(&self, shop_id: &str) -> StoreResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let index = read_txn.open_table(SHOP_ORDERS_TABLE)?;
        let orders_table = read_txn.open_table(ORDERS_TABLE)?;

        let mut orders = Vec::new();
        // Open-ended scan from the shop prefix; stops at the first foreign
        // key so no assumption about the order-id alphabet is needed.
        for result in index.range((shop_id, "")..)? {
            let (key, _value) = result?;
            let (key_shop_id, order_id) = key.value();
            if key_shop_id != shop_id {
                break;
            }
            if let Some(value) = orders_table.get(order_id)? {
                let order: Order = serde_json::from_slice(value.value())?;
                orders.push(order);
            }
        }
        Ok(orders)
    }
}
