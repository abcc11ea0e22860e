//! In-memory account store

use std::collections::HashMap;

use core_kernel::{AccountId, UserId};
use domain_banking::{Account, AccountStore};

/// HashMap-backed implementation of [`AccountStore`]
#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    accounts: HashMap<AccountId, Account>,
}

impl MemoryAccountStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts, open or closed
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl AccountStore for MemoryAccountStore {
    fn save_account(&mut self, account: Account) {
        self.accounts.insert(account.id, account);
    }

    fn find_account(&self, id: AccountId) -> Option<Account> {
        self.accounts.get(&id).cloned()
    }

    fn find_accounts_by_owner(&self, owner_id: UserId) -> Vec<Account> {
        self.accounts
            .values()
            .filter(|account| account.owner_id == owner_id)
            .cloned()
            .collect()
    }

    fn delete_account(&mut self, id: AccountId) {
        self.accounts.remove(&id);
    }

    fn exists_account(&self, id: AccountId) -> bool {
        self.accounts.contains_key(&id)
    }
}
