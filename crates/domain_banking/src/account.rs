//! Account entity and balance-mutation primitives
//!
//! This module enforces the per-account invariants independent of any
//! single operation: the balance never goes below zero, and mutation is
//! only permitted while the account is active. All mutations here are
//! pure in-memory state transitions; persistence is the caller's explicit
//! follow-up step.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{AccountId, Money, UserId};

use crate::error::BankingError;

/// Maximum number of open accounts a single owner may hold
pub const MAX_ACCOUNTS_PER_OWNER: usize = 5;

/// The closed set of account types offered by the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountType {
    Checking,
    Savings,
    Blocked,
    Business,
}

impl AccountType {
    /// Every offered account type, in menu order
    pub const ALL: [AccountType; 4] = [
        AccountType::Checking,
        AccountType::Savings,
        AccountType::Blocked,
        AccountType::Business,
    ];

    /// Human-readable label, kept separate from business logic
    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Checking => "Checking Account",
            AccountType::Savings => "Savings Account",
            AccountType::Blocked => "Blocked Account",
            AccountType::Business => "Business Account",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AccountType {
    type Err = BankingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "checking" => Ok(AccountType::Checking),
            "savings" => Ok(AccountType::Savings),
            "blocked" => Ok(AccountType::Blocked),
            "business" => Ok(AccountType::Business),
            other => Err(BankingError::InvalidAccountType(other.to_string())),
        }
    }
}

/// Lifecycle status of an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    /// Balance mutation is permitted
    Active,
    /// Terminal state; the record stays in the store for history lookups
    Closed,
}

/// A bank account owned by a single user for its entire lifetime
///
/// # Invariants
///
/// - `balance` is never negative
/// - `balance` changes only while `status` is `Active`
/// - `owner_id` is immutable after creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,
    /// The owning user; never reassigned
    pub owner_id: UserId,
    /// Product type
    pub account_type: AccountType,
    /// Current balance, two-decimal scale
    pub balance: Money,
    /// Lifecycle status
    pub status: AccountStatus,
    /// When the account was opened
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Opens a new account with a zero balance
    pub fn open(owner_id: UserId, account_type: AccountType) -> Self {
        Self {
            id: AccountId::new(),
            owner_id,
            account_type,
            balance: Money::zero(),
            status: AccountStatus::Active,
            opened_at: Utc::now(),
        }
    }

    /// Returns true if the account permits balance mutation
    pub fn is_active(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Adds `amount` to the balance
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount` is zero or negative
    /// - `AccountNotActive` if the account is closed
    pub fn credit(&mut self, amount: Money) -> Result<(), BankingError> {
        if !amount.is_positive() {
            return Err(BankingError::NonPositiveAmount(amount));
        }
        if !self.is_active() {
            return Err(BankingError::AccountNotActive(self.id));
        }
        self.balance = self.balance + amount;
        Ok(())
    }

    /// Subtracts `amount` from the balance
    ///
    /// # Errors
    ///
    /// - `NonPositiveAmount` if `amount` is zero or negative
    /// - `AccountNotActive` if the account is closed
    /// - `InsufficientFunds` if the balance would go below zero
    pub fn debit(&mut self, amount: Money) -> Result<(), BankingError> {
        if !amount.is_positive() {
            return Err(BankingError::NonPositiveAmount(amount));
        }
        if !self.is_active() {
            return Err(BankingError::AccountNotActive(self.id));
        }
        if self.balance < amount {
            return Err(BankingError::InsufficientFunds {
                balance: self.balance,
                requested: amount,
            });
        }
        self.balance = self.balance - amount;
        Ok(())
    }

    /// Transitions the account to `Closed`
    ///
    /// Only a zero-balance active account can close; any failure leaves
    /// the account untouched.
    ///
    /// # Errors
    ///
    /// - `AccountNotActive` if already closed
    /// - `NonZeroBalance` if funds remain on the account
    pub fn close(&mut self) -> Result<(), BankingError> {
        if !self.is_active() {
            return Err(BankingError::AccountNotActive(self.id));
        }
        if !self.balance.is_zero() {
            return Err(BankingError::NonZeroBalance(self.balance));
        }
        self.status = AccountStatus::Closed;
        Ok(())
    }
}
