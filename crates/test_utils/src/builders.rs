//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and take defaults for the rest.

use chrono::Utc;
use core_kernel::{AccountId, Money, UserId};
use domain_banking::{Account, AccountStatus, AccountType};
use domain_user::User;

/// Builder for test accounts
pub struct AccountBuilder {
    id: AccountId,
    owner_id: UserId,
    account_type: AccountType,
    balance: Money,
    status: AccountStatus,
}

impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountBuilder {
    /// Creates a builder for an active checking account with zero balance
    pub fn new() -> Self {
        Self {
            id: AccountId::new(),
            owner_id: UserId::new(),
            account_type: AccountType::Checking,
            balance: Money::zero(),
            status: AccountStatus::Active,
        }
    }

    /// Sets the owner
    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owner_id = owner_id;
        self
    }

    /// Sets the account type
    pub fn with_type(mut self, account_type: AccountType) -> Self {
        self.account_type = account_type;
        self
    }

    /// Sets the starting balance, bypassing the credit path
    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    /// Marks the account closed
    pub fn closed(mut self) -> Self {
        self.status = AccountStatus::Closed;
        self
    }

    /// Builds the account
    pub fn build(self) -> Account {
        Account {
            id: self.id,
            owner_id: self.owner_id,
            account_type: self.account_type,
            balance: self.balance,
            status: self.status,
            opened_at: Utc::now(),
        }
    }
}

/// Builder for test users
pub struct UserBuilder {
    full_name: String,
    email: String,
    address: String,
    password: String,
}

impl Default for UserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UserBuilder {
    /// Creates a builder with a plausible default user
    pub fn new() -> Self {
        Self {
            full_name: "Test User".to_string(),
            email: format!("user-{}@example.com", UserId::new().as_uuid().simple()),
            address: "1 Test Street".to_string(),
            password: "secret1".to_string(),
        }
    }

    /// Sets the email address
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Builds the user
    pub fn build(self) -> User {
        User::new(self.full_name, self.email, self.address, self.password)
    }
}
