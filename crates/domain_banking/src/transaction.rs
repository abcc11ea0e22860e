//! Immutable transaction records and history ordering
//!
//! A transaction is one leg of a balance mutation: a deposit, a withdrawal,
//! or one side of a transfer. Records are append-only; nothing in the
//! system ever updates or deletes one. Amounts are stored as positive
//! magnitudes, with the semantic direction carried by [`TransactionKind`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AccountId, Money, TransactionId};

/// The semantic direction of a transaction leg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    /// Debit leg of a transfer, recorded on the source account
    TransferOut,
    /// Credit leg of a transfer, recorded on the destination account
    TransferIn,
}

impl TransactionKind {
    /// Human-readable label for statements
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::TransferOut => "Transfer out",
            TransactionKind::TransferIn => "Transfer in",
        }
    }

    /// Returns true if this leg increases the account balance
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Deposit | TransactionKind::TransferIn)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An immutable record of one balance mutation on one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,
    /// The account this leg applies to (back-reference only)
    pub account_id: AccountId,
    /// Direction of the leg
    pub kind: TransactionKind,
    /// Positive magnitude, two-decimal scale
    pub amount: Money,
    /// Wall-clock instant; used only for ordering
    pub timestamp: DateTime<Utc>,
}

impl Transaction {
    /// Constructs a record with a fresh unique id
    ///
    /// The timestamp is supplied by the caller so that the two legs of a
    /// transfer share one captured instant.
    pub fn record(
        account_id: AccountId,
        kind: TransactionKind,
        amount: Money,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            account_id,
            kind,
            amount,
            timestamp,
        }
    }
}

/// Orders a freshly fetched history by ascending timestamp
///
/// The sort is stable: legs sharing a timestamp keep their insertion order.
pub fn sort_history(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    transactions.sort_by_key(|t| t.timestamp);
    transactions
}
