//! In-Memory Storage Adapters
//!
//! Default adapters for the banking and user storage ports, each backed by
//! a `HashMap` keyed by typed identifier. Pure key-value lookup: no
//! durability, no concurrency control, no business rules. A durable
//! adapter can replace any of these without touching the domain crates.

pub mod accounts;
pub mod transactions;
pub mod users;

pub use accounts::MemoryAccountStore;
pub use transactions::MemoryTransactionStore;
pub use users::MemoryUserStore;
