//! In-memory transaction store

use std::collections::HashMap;

use core_kernel::{AccountId, TransactionId};
use domain_banking::{Transaction, TransactionStore};

/// HashMap-backed implementation of [`TransactionStore`]
#[derive(Debug, Default)]
pub struct MemoryTransactionStore {
    transactions: HashMap<TransactionId, Transaction>,
}

impl MemoryTransactionStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of recorded legs
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

impl TransactionStore for MemoryTransactionStore {
    fn save_transaction(&mut self, transaction: Transaction) {
        self.transactions.insert(transaction.id, transaction);
    }

    fn find_transaction(&self, id: TransactionId) -> Option<Transaction> {
        self.transactions.get(&id).cloned()
    }

    fn find_transactions_by_account(&self, account_id: AccountId) -> Vec<Transaction> {
        self.transactions
            .values()
            .filter(|transaction| transaction.account_id == account_id)
            .cloned()
            .collect()
    }

    fn exists_transaction(&self, id: TransactionId) -> bool {
        self.transactions.contains_key(&id)
    }
}
