//! Console Banking Simulator - CLI Binary
//!
//! Starts the interactive console front end over fresh in-memory stores.
//! Nothing survives process exit.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin banking-cli
//!
//! # Run with environment variables
//! APP_BANK_NAME="My Bank" APP_LOG_LEVEL=debug cargo run --bin banking-cli
//! ```
//!
//! # Environment Variables
//!
//! * `APP_BANK_NAME` - Name shown in menu headers (default: Console Bank)
//! * `APP_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)

use interface_cli::{App, CliConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env()?;
    init_tracing(&config.log_level);

    tracing::debug!(bank_name = %config.bank_name, "starting console banking simulator");

    App::new(config).run()
}

/// Initializes the tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to
/// stderr so they never interleave with the menus on stdout.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
