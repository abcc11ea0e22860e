//! User domain errors

use core_kernel::UserId;
use thiserror::Error;

use crate::validation::MIN_PASSWORD_LENGTH;

/// Errors that can occur in the user domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// Email address fails the structural format check
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Password shorter than the minimum length
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    /// Another user already registered this email
    #[error("Email already registered: {0}")]
    EmailTaken(String),

    /// Unknown email or wrong password; deliberately undifferentiated
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Operation references an unknown user id
    #[error("User not found: {0}")]
    UserNotFound(UserId),
}
