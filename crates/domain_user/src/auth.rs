//! Authentication service
//!
//! Register/login/logout over a [`UserStore`]. Credentials are compared in
//! clear text per the simulator's stated scope; session state is a single
//! flag on the user record.

use tracing::{info, warn};

use core_kernel::UserId;

use crate::error::UserError;
use crate::ports::UserStore;
use crate::user::User;
use crate::validation::{is_valid_email, is_valid_password};

/// Service handling registration and session state
pub struct AuthService<S: UserStore> {
    users: S,
}

impl<S: UserStore> AuthService<S> {
    /// Creates a service over the given store
    pub fn new(users: S) -> Self {
        Self { users }
    }

    /// Registers a new user
    ///
    /// # Errors
    ///
    /// - `InvalidEmail` if the address fails the structural check
    /// - `PasswordTooShort` if the password is under the minimum length
    /// - `EmailTaken` if another user already registered the address
    pub fn register(
        &mut self,
        full_name: &str,
        email: &str,
        address: &str,
        password: &str,
    ) -> Result<User, UserError> {
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(UserError::InvalidEmail(email.to_string()));
        }
        if !is_valid_password(password) {
            return Err(UserError::PasswordTooShort);
        }
        if self.users.find_by_email(email).is_some() {
            return Err(UserError::EmailTaken(email.to_string()));
        }

        let user = User::new(full_name.trim(), email, address.trim(), password);
        self.users.save_user(user.clone());
        info!(user_id = %user.id, "user registered");
        Ok(user)
    }

    /// Logs a user in by email and clear-text password
    ///
    /// Unknown email and wrong password both surface as
    /// `InvalidCredentials`.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, UserError> {
        let Some(mut user) = self.users.find_by_email(email.trim()) else {
            warn!("login attempt for unknown email");
            return Err(UserError::InvalidCredentials);
        };
        if user.password != password {
            warn!(user_id = %user.id, "login attempt with wrong password");
            return Err(UserError::InvalidCredentials);
        }

        user.logged_in = true;
        self.users.save_user(user.clone());
        info!(user_id = %user.id, "user logged in");
        Ok(user)
    }

    /// Clears the session flag; unknown ids are an error
    pub fn logout(&mut self, user_id: UserId) -> Result<(), UserError> {
        let mut user = self
            .users
            .find_user(user_id)
            .ok_or(UserError::UserNotFound(user_id))?;
        user.logged_in = false;
        self.users.save_user(user);
        info!(%user_id, "user logged out");
        Ok(())
    }

    /// Returns true if the user exists and holds an open session
    pub fn is_logged_in(&self, user_id: UserId) -> bool {
        self.users
            .find_user(user_id)
            .map(|u| u.logged_in)
            .unwrap_or(false)
    }
}
