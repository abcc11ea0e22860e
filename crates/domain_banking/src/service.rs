//! Banking service orchestration
//!
//! The service composes the account primitives, the transaction log, and
//! the storage ports into all-or-nothing operations. Each call follows the
//! same sequence: validate, mutate in-memory copies, record the legs,
//! persist. Every validation completes before the first mutation, so a
//! typed failure never leaves partial state behind.

use chrono::Utc;
use tracing::{info, warn};

use core_kernel::{AccountId, Money, UserId};

use crate::account::{Account, AccountType, MAX_ACCOUNTS_PER_OWNER};
use crate::error::BankingError;
use crate::ports::{AccountStore, TransactionStore};
use crate::transaction::{sort_history, Transaction, TransactionKind};

/// Outcome of a successful transfer: both legs, already persisted
#[derive(Debug, Clone)]
pub struct TransferReceipt {
    /// Debit leg, recorded on the source account
    pub debit: Transaction,
    /// Credit leg, recorded on the destination account
    pub credit: Transaction,
}

/// The root banking service
///
/// Owns its storage ports; operations run synchronously to completion.
/// Per-account state is re-read from the store on every call rather than
/// cached between operations.
pub struct BankingService<A, T>
where
    A: AccountStore,
    T: TransactionStore,
{
    accounts: A,
    transactions: T,
}

impl<A, T> BankingService<A, T>
where
    A: AccountStore,
    T: TransactionStore,
{
    /// Creates a service over the given stores
    pub fn new(accounts: A, transactions: T) -> Self {
        Self {
            accounts,
            transactions,
        }
    }

    /// Opens a new account for `owner_id`
    ///
    /// # Errors
    ///
    /// Returns `AccountLimitExceeded` if the owner already holds the
    /// maximum number of open accounts.
    pub fn open_account(
        &mut self,
        owner_id: UserId,
        account_type: AccountType,
    ) -> Result<Account, BankingError> {
        let held = self.open_accounts_of(owner_id).len();
        if held >= MAX_ACCOUNTS_PER_OWNER {
            warn!(%owner_id, held, "account limit reached");
            return Err(BankingError::AccountLimitExceeded { owner_id, held });
        }

        let account = Account::open(owner_id, account_type);
        self.accounts.save_account(account.clone());
        info!(account_id = %account.id, %owner_id, account_type = %account.account_type, "account opened");
        Ok(account)
    }

    /// Closes an account owned by `owner_id`
    ///
    /// Closing is a status change: the record stays in the store so the
    /// transaction history remains resolvable.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` if the account is unknown or owned by someone else
    /// - `NonZeroBalance` if funds remain on the account
    /// - `AccountNotActive` if the account is already closed
    pub fn close_account(
        &mut self,
        owner_id: UserId,
        account_id: AccountId,
    ) -> Result<Account, BankingError> {
        let mut account = self.owned_account(owner_id, account_id)?;
        account.close()?;
        self.accounts.save_account(account.clone());
        info!(%account_id, %owner_id, "account closed");
        Ok(account)
    }

    /// Deposits `amount` into the account and records the leg
    pub fn deposit(
        &mut self,
        account_id: AccountId,
        amount: Money,
    ) -> Result<Transaction, BankingError> {
        let mut account = self.require_account(account_id)?;
        account.credit(amount)?;

        let leg = Transaction::record(account_id, TransactionKind::Deposit, amount, Utc::now());
        self.accounts.save_account(account);
        self.transactions.save_transaction(leg.clone());
        info!(%account_id, %amount, "deposit applied");
        Ok(leg)
    }

    /// Withdraws `amount` from the account and records the leg
    ///
    /// # Errors
    ///
    /// As [`deposit`](Self::deposit), plus `InsufficientFunds` if the
    /// balance cannot cover the amount.
    pub fn withdraw(
        &mut self,
        account_id: AccountId,
        amount: Money,
    ) -> Result<Transaction, BankingError> {
        let mut account = self.require_account(account_id)?;
        account.debit(amount)?;

        let leg = Transaction::record(account_id, TransactionKind::Withdrawal, amount, Utc::now());
        self.accounts.save_account(account);
        self.transactions.save_transaction(leg.clone());
        info!(%account_id, %amount, "withdrawal applied");
        Ok(leg)
    }

    /// Moves `amount` from `source_id` to `dest_id` atomically
    ///
    /// The destination is resolved through the global store and must be
    /// active. Exactly two legs are recorded, sharing one captured
    /// timestamp and equal magnitude. All validation precedes any
    /// mutation, so a failure leaves both balances untouched.
    ///
    /// # Errors
    ///
    /// - `SameAccount` if source and destination are identical
    /// - `AccountNotFound` if either account is unknown
    /// - `AccountNotActive` if either account is closed
    /// - `NonPositiveAmount` if the amount is zero or negative
    /// - `InsufficientFunds` if the source balance cannot cover the amount
    pub fn transfer(
        &mut self,
        source_id: AccountId,
        dest_id: AccountId,
        amount: Money,
    ) -> Result<TransferReceipt, BankingError> {
        if source_id == dest_id {
            return Err(BankingError::SameAccount(source_id));
        }

        let mut source = self.require_account(source_id)?;
        let mut dest = self.require_account(dest_id)?;
        if !dest.is_active() {
            return Err(BankingError::AccountNotActive(dest_id));
        }

        // Debit validates amount, source status, and funds before touching
        // the local copy; nothing has been persisted yet either way.
        source.debit(amount)?;
        dest.credit(amount)?;

        let timestamp = Utc::now();
        let debit_leg =
            Transaction::record(source_id, TransactionKind::TransferOut, amount, timestamp);
        let credit_leg =
            Transaction::record(dest_id, TransactionKind::TransferIn, amount, timestamp);

        self.accounts.save_account(source);
        self.accounts.save_account(dest);
        self.transactions.save_transaction(debit_leg.clone());
        self.transactions.save_transaction(credit_leg.clone());
        info!(%source_id, %dest_id, %amount, "transfer applied");

        Ok(TransferReceipt {
            debit: debit_leg,
            credit: credit_leg,
        })
    }

    /// Returns the account's full history, ordered by ascending timestamp
    ///
    /// Recomputed fresh on every call.
    pub fn history(&self, account_id: AccountId) -> Result<Vec<Transaction>, BankingError> {
        if !self.accounts.exists_account(account_id) {
            return Err(BankingError::AccountNotFound(account_id));
        }
        Ok(sort_history(
            self.transactions.find_transactions_by_account(account_id),
        ))
    }

    /// Returns the current balance of an account
    pub fn balance(&self, account_id: AccountId) -> Result<Money, BankingError> {
        self.require_account(account_id).map(|a| a.balance)
    }

    /// Returns every account the owner holds, open or closed
    pub fn accounts_of(&self, owner_id: UserId) -> Vec<Account> {
        self.accounts.find_accounts_by_owner(owner_id)
    }

    /// Returns the owner's accounts that still permit mutation
    pub fn open_accounts_of(&self, owner_id: UserId) -> Vec<Account> {
        self.accounts
            .find_accounts_by_owner(owner_id)
            .into_iter()
            .filter(Account::is_active)
            .collect()
    }

    fn require_account(&self, account_id: AccountId) -> Result<Account, BankingError> {
        self.accounts
            .find_account(account_id)
            .ok_or(BankingError::AccountNotFound(account_id))
    }

    fn owned_account(
        &self,
        owner_id: UserId,
        account_id: AccountId,
    ) -> Result<Account, BankingError> {
        // Ownership failures are indistinguishable from absence on purpose:
        // one user never learns whether another user's account id exists.
        self.require_account(account_id)
            .ok()
            .filter(|a| a.owner_id == owner_id)
            .ok_or(BankingError::AccountNotFound(account_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashMap;

    use core_kernel::TransactionId;

    // Minimal fakes; the real adapters live in infra_memory and are
    // exercised by the integration suite.
    #[derive(Default)]
    struct FakeAccounts(HashMap<AccountId, Account>);

    impl AccountStore for FakeAccounts {
        fn save_account(&mut self, account: Account) {
            self.0.insert(account.id, account);
        }

        fn find_account(&self, id: AccountId) -> Option<Account> {
            self.0.get(&id).cloned()
        }

        fn find_accounts_by_owner(&self, owner_id: UserId) -> Vec<Account> {
            self.0
                .values()
                .filter(|a| a.owner_id == owner_id)
                .cloned()
                .collect()
        }

        fn delete_account(&mut self, id: AccountId) {
            self.0.remove(&id);
        }

        fn exists_account(&self, id: AccountId) -> bool {
            self.0.contains_key(&id)
        }
    }

    #[derive(Default)]
    struct FakeTransactions(HashMap<TransactionId, Transaction>);

    impl TransactionStore for FakeTransactions {
        fn save_transaction(&mut self, transaction: Transaction) {
            self.0.insert(transaction.id, transaction);
        }

        fn find_transaction(&self, id: TransactionId) -> Option<Transaction> {
            self.0.get(&id).cloned()
        }

        fn find_transactions_by_account(&self, account_id: AccountId) -> Vec<Transaction> {
            self.0
                .values()
                .filter(|t| t.account_id == account_id)
                .cloned()
                .collect()
        }

        fn exists_transaction(&self, id: TransactionId) -> bool {
            self.0.contains_key(&id)
        }
    }

    fn service() -> BankingService<FakeAccounts, FakeTransactions> {
        BankingService::new(FakeAccounts::default(), FakeTransactions::default())
    }

    #[test]
    fn test_open_account_persists_and_returns_it() {
        let mut bank = service();
        let owner = UserId::new();

        let account = bank.open_account(owner, AccountType::Checking).unwrap();

        let found = bank.balance(account.id).unwrap();
        assert!(found.is_zero());
    }

    #[test]
    fn test_open_account_enforces_owner_limit() {
        let mut bank = service();
        let owner = UserId::new();

        for _ in 0..MAX_ACCOUNTS_PER_OWNER {
            bank.open_account(owner, AccountType::Savings).unwrap();
        }

        let result = bank.open_account(owner, AccountType::Savings);
        assert!(matches!(
            result,
            Err(BankingError::AccountLimitExceeded { held: 5, .. })
        ));
    }

    #[test]
    fn test_closed_accounts_free_up_the_limit() {
        let mut bank = service();
        let owner = UserId::new();

        for _ in 0..MAX_ACCOUNTS_PER_OWNER {
            bank.open_account(owner, AccountType::Savings).unwrap();
        }
        let victim = bank.open_accounts_of(owner)[0].id;
        bank.close_account(owner, victim).unwrap();

        assert!(bank.open_account(owner, AccountType::Checking).is_ok());
    }

    #[test]
    fn test_close_account_rejects_foreign_owner() {
        let mut bank = service();
        let owner = UserId::new();
        let intruder = UserId::new();
        let account = bank.open_account(owner, AccountType::Checking).unwrap();

        let result = bank.close_account(intruder, account.id);
        assert!(matches!(result, Err(BankingError::AccountNotFound(_))));
        assert!(bank.balance(account.id).is_ok());
    }

    #[test]
    fn test_close_keeps_record_in_store() {
        let mut bank = service();
        let owner = UserId::new();
        let account = bank.open_account(owner, AccountType::Checking).unwrap();

        bank.close_account(owner, account.id).unwrap();

        // Still resolvable for history, just no longer open.
        assert!(bank.history(account.id).is_ok());
        assert!(bank.open_accounts_of(owner).is_empty());
        assert_eq!(bank.accounts_of(owner).len(), 1);
    }

    #[test]
    fn test_deposit_records_exactly_one_leg() {
        let mut bank = service();
        let owner = UserId::new();
        let account = bank.open_account(owner, AccountType::Checking).unwrap();

        bank.deposit(account.id, Money::new(dec!(100.00))).unwrap();

        assert_eq!(bank.balance(account.id).unwrap(), Money::new(dec!(100.00)));
        assert_eq!(bank.history(account.id).unwrap().len(), 1);
    }

    #[test]
    fn test_failed_withdrawal_leaves_no_trace() {
        let mut bank = service();
        let owner = UserId::new();
        let account = bank.open_account(owner, AccountType::Checking).unwrap();
        bank.deposit(account.id, Money::new(dec!(100.00))).unwrap();

        let result = bank.withdraw(account.id, Money::new(dec!(150.00)));

        assert!(matches!(result, Err(BankingError::InsufficientFunds { .. })));
        assert_eq!(bank.balance(account.id).unwrap(), Money::new(dec!(100.00)));
        assert_eq!(bank.history(account.id).unwrap().len(), 1);
    }

    #[test]
    fn test_transfer_moves_funds_and_pairs_legs() {
        let mut bank = service();
        let owner = UserId::new();
        let a = bank.open_account(owner, AccountType::Checking).unwrap();
        let b = bank.open_account(owner, AccountType::Savings).unwrap();
        bank.deposit(a.id, Money::new(dec!(100.00))).unwrap();

        let receipt = bank.transfer(a.id, b.id, Money::new(dec!(40.00))).unwrap();

        assert_eq!(bank.balance(a.id).unwrap(), Money::new(dec!(60.00)));
        assert_eq!(bank.balance(b.id).unwrap(), Money::new(dec!(40.00)));
        assert_eq!(receipt.debit.amount, receipt.credit.amount);
        assert_eq!(receipt.debit.timestamp, receipt.credit.timestamp);
        assert_eq!(receipt.debit.account_id, a.id);
        assert_eq!(receipt.credit.account_id, b.id);
    }

    #[test]
    fn test_transfer_rejects_same_account() {
        let mut bank = service();
        let owner = UserId::new();
        let a = bank.open_account(owner, AccountType::Checking).unwrap();
        bank.deposit(a.id, Money::new(dec!(10.00))).unwrap();

        let result = bank.transfer(a.id, a.id, Money::new(dec!(5.00)));
        assert!(matches!(result, Err(BankingError::SameAccount(_))));
        assert_eq!(bank.balance(a.id).unwrap(), Money::new(dec!(10.00)));
    }

    #[test]
    fn test_transfer_rejects_closed_destination_without_mutating_source() {
        let mut bank = service();
        let owner = UserId::new();
        let a = bank.open_account(owner, AccountType::Checking).unwrap();
        let b = bank.open_account(owner, AccountType::Savings).unwrap();
        bank.deposit(a.id, Money::new(dec!(100.00))).unwrap();
        bank.close_account(owner, b.id).unwrap();

        let result = bank.transfer(a.id, b.id, Money::new(dec!(40.00)));

        assert!(matches!(result, Err(BankingError::AccountNotActive(_))));
        assert_eq!(bank.balance(a.id).unwrap(), Money::new(dec!(100.00)));
        assert_eq!(bank.history(a.id).unwrap().len(), 1);
        assert!(bank.history(b.id).unwrap().is_empty());
    }

    #[test]
    fn test_history_unknown_account_is_an_error() {
        let bank = service();
        let result = bank.history(AccountId::new());
        assert!(matches!(result, Err(BankingError::AccountNotFound(_))));
    }
}
