//! User Domain - Registration, Login, and Session State
//!
//! Account ownership in the banking core references users by id only; this
//! crate supplies those identities. Passwords are compared in clear text;
//! the simulator makes no authentication-security claims.

pub mod auth;
pub mod error;
pub mod ports;
pub mod user;
pub mod validation;

pub use auth::AuthService;
pub use error::UserError;
pub use ports::UserStore;
pub use user::User;
