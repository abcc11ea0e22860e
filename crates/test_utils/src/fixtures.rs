//! Pre-built test data for common entities

use core_kernel::{AccountId, Money, UserId};
use rust_decimal_macros::dec;

/// Common money amounts used across the suite
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A typical deposit: 100.00
    pub fn hundred() -> Money {
        Money::new(dec!(100.00))
    }

    /// A typical transfer: 40.00
    pub fn forty() -> Money {
        Money::new(dec!(40.00))
    }

    /// The smallest representable positive amount: 0.01
    pub fn one_cent() -> Money {
        Money::new(dec!(0.01))
    }

    /// A clearly negative amount for rejection tests
    pub fn negative() -> Money {
        Money::new(dec!(-5.00))
    }
}

/// Fresh identifiers for tests that only need uniqueness
pub struct IdFixtures;

impl IdFixtures {
    pub fn owner() -> UserId {
        UserId::new()
    }

    pub fn account() -> AccountId {
        AccountId::new()
    }
}
