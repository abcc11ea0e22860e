//! Test Utilities Crate
//!
//! Shared fixtures and builders for the banking test suites.
//!
//! # Modules
//!
//! - `fixtures`: pre-built money amounts and identifiers
//! - `builders`: builder patterns for accounts and users with sensible defaults

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
