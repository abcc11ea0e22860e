//! Banking storage ports
//!
//! These traits define what the banking domain needs from its storage,
//! keeping the domain logic testable with fakes and leaving room for a
//! durable adapter later. The two capabilities are independently
//! substitutable; `infra_memory` provides the default in-memory adapters.
//!
//! The store is the single source of truth: values returned from it are
//! logical copies for the duration of one operation, and callers re-read
//! rather than cache across operations.
//!
//! All methods are synchronous. Banking operations never suspend or block
//! on I/O, and the `&mut self` receivers let the type system enforce the
//! single-caller discipline the domain assumes.

use core_kernel::{AccountId, TransactionId, UserId};

use crate::account::Account;
use crate::transaction::Transaction;

/// Keyed storage for accounts; pure CRUD, no business rules
pub trait AccountStore {
    /// Upserts an account by its id
    fn save_account(&mut self, account: Account);

    /// Returns a copy of the account, or absence if unknown
    fn find_account(&self, id: AccountId) -> Option<Account>;

    /// Returns all accounts held by the owner, in no particular order
    fn find_accounts_by_owner(&self, owner_id: UserId) -> Vec<Account>;

    /// Removes an account by id; deleting an absent id is a no-op
    fn delete_account(&mut self, id: AccountId);

    /// Pure existence check, O(1) expected
    fn exists_account(&self, id: AccountId) -> bool;
}

/// Keyed storage for transaction records; append-oriented
pub trait TransactionStore {
    /// Upserts a transaction by its id
    fn save_transaction(&mut self, transaction: Transaction);

    /// Returns a copy of the transaction, or absence if unknown
    fn find_transaction(&self, id: TransactionId) -> Option<Transaction>;

    /// Returns all legs recorded against the account, unordered; the
    /// caller sorts
    fn find_transactions_by_account(&self, account_id: AccountId) -> Vec<Transaction>;

    /// Pure existence check, O(1) expected
    fn exists_transaction(&self, id: TransactionId) -> bool;
}
