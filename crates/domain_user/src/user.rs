//! User entity

use serde::{Deserialize, Serialize};

use core_kernel::UserId;

/// A registered user of the banking simulator
///
/// Owns zero or more accounts; ownership is resolved through the account
/// store by `owner_id`, never held as an embedded list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,
    /// Display name
    pub full_name: String,
    /// Login identity; unique across the store
    pub email: String,
    /// Postal address
    pub address: String,
    /// Stored in clear text; the simulator makes no security claims
    pub password: String,
    /// Session flag toggled by login/logout
    pub logged_in: bool,
}

impl User {
    /// Creates a new user, initially logged out
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            id: UserId::new(),
            full_name: full_name.into(),
            email: email.into(),
            address: address.into(),
            password: password.into(),
            logged_in: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_is_logged_out() {
        let user = User::new("Ada Lovelace", "ada@example.com", "12 Crunch St", "secret");
        assert!(!user.logged_in);
        assert_eq!(user.email, "ada@example.com");
    }
}
