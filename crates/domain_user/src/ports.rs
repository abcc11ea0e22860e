//! User storage port

use core_kernel::UserId;

use crate::user::User;

/// Keyed storage for users; pure CRUD, no business rules
///
/// Synchronous for the same reason as the banking ports: nothing in this
/// system suspends or blocks on I/O.
pub trait UserStore {
    /// Upserts a user by id
    fn save_user(&mut self, user: User);

    /// Returns a copy of the user, or absence if unknown
    fn find_user(&self, id: UserId) -> Option<User>;

    /// Looks a user up by exact email match
    fn find_by_email(&self, email: &str) -> Option<User>;

    /// Removes a user by id; deleting an absent id is a no-op
    fn delete_user(&mut self, id: UserId);
}
