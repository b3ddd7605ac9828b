//! Order Fulfillment Core
//!
//! - `store`: persistence interface the engine consumes
//! - `storage`: embedded redb implementation
//! - `engine`: the transition state machine
//! - `validator`: decimal-precise amount checks

pub mod engine;
pub mod storage;
pub mod store;
pub mod validator;

// Re-exports
pub use engine::{OrderActions, OrderDetail, TransitionEngine, TransitionError, TransitionResult};
pub use storage::RedbOrderStore;
pub use store::{OrderStore, StoreError, StoreResult};
