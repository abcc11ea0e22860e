//! Banking Domain - Accounts, Transaction Log, and the Banking Service
//!
//! This crate implements the invariant-preserving core of the console
//! banking system:
//!
//! - **Accounts** hold a non-negative balance at a fixed two-decimal scale
//!   and only accept mutation while active
//! - **Transactions** form an immutable, append-only log; history is always
//!   returned in ascending timestamp order
//! - **BankingService** composes the two over swappable storage ports,
//!   running every operation as an all-or-nothing sequence: validate,
//!   mutate in memory, log, persist
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_banking::{AccountType, BankingService};
//!
//! let mut bank = BankingService::new(account_store, transaction_store);
//!
//! let account = bank.open_account(owner_id, AccountType::Checking)?;
//! bank.deposit(account.id, "100.00".parse()?)?;
//! bank.withdraw(account.id, "40.00".parse()?)?;
//! ```

pub mod account;
pub mod error;
pub mod ports;
pub mod service;
pub mod transaction;

pub use account::{Account, AccountStatus, AccountType, MAX_ACCOUNTS_PER_OWNER};
pub use error::BankingError;
pub use ports::{AccountStore, TransactionStore};
pub use service::{BankingService, TransferReceipt};
pub use transaction::{sort_history, Transaction, TransactionKind};
