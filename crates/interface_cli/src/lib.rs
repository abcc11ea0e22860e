//! Console Front End
//!
//! Interactive stdin/stdout menus over the banking and user services.
//! This layer parses input, calls the services, and renders the typed
//! outcomes; every business rule lives in the domain crates.

pub mod app;
pub mod config;
pub mod input;

pub use app::App;
pub use config::CliConfig;
