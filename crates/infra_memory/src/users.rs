//! In-memory user store

use std::collections::HashMap;

use core_kernel::UserId;
use domain_user::{User, UserStore};

/// HashMap-backed implementation of [`UserStore`]
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: HashMap<UserId, User>,
}

impl MemoryUserStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered users
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns true if nothing is stored
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl UserStore for MemoryUserStore {
    fn save_user(&mut self, user: User) {
        self.users.insert(user.id, user);
    }

    fn find_user(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    fn find_by_email(&self, email: &str) -> Option<User> {
        self.users.values().find(|u| u.email == email).cloned()
    }

    fn delete_user(&mut self, id: UserId) {
        self.users.remove(&id);
    }
}
