//! CLI configuration

use serde::{Deserialize, Serialize};

/// Console application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Name shown in menu headers
    pub bank_name: String,
    /// Log level
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            bank_name: "Console Bank".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `APP_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&CliConfig::default())?)
            .add_source(config::Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CliConfig::default();
        assert_eq!(cfg.bank_name, "Console Bank");
        assert_eq!(cfg.log_level, "warn");
    }
}
