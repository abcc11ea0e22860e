//! Banking domain errors

use core_kernel::{AccountId, Money, UserId};
use thiserror::Error;

use crate::account::MAX_ACCOUNTS_PER_OWNER;

/// Errors that can occur in the banking domain
///
/// Every business-rule violation is detected before any mutation and
/// surfaced as one of these variants; the presentation layer decides how
/// to display them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BankingError {
    /// Operation references an unknown account, or one owned by someone else
    #[error("Account not found: {0}")]
    AccountNotFound(AccountId),

    /// Account type outside the fixed enumeration
    #[error("Invalid account type: {0}")]
    InvalidAccountType(String),

    /// Owner already holds the maximum number of accounts
    #[error("Account limit exceeded: owner {owner_id} already holds {held} of {MAX_ACCOUNTS_PER_OWNER} accounts")]
    AccountLimitExceeded { owner_id: UserId, held: usize },

    /// Mutation attempted on a closed account
    #[error("Account is not active: {0}")]
    AccountNotActive(AccountId),

    /// Amount supplied to deposit/withdraw/transfer was zero or negative
    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Money),

    /// Debit would take the balance below zero
    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Money, requested: Money },

    /// Close attempted on an account still holding funds
    #[error("Account balance must be zero to close, got {0}")]
    NonZeroBalance(Money),

    /// Transfer source and destination are the same account
    #[error("Cannot transfer to the same account: {0}")]
    SameAccount(AccountId),
}
