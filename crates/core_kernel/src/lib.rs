//! Core Kernel - Foundational types for the console banking system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money with precise decimal arithmetic at a fixed two-decimal scale
//! - Strongly-typed identifiers for accounts, transactions, and users

pub mod identifiers;
pub mod money;

pub use identifiers::{AccountId, TransactionId, UserId};
pub use money::{Money, MoneyError};
