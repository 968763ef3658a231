//! Configuration for the sweep engine

use serde::{Deserialize, Serialize};

/// Sweep engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Service name
    pub service_name: String,

    /// Service version
    pub service_version: String,

    /// Channel applied to ledger queries and booked instructions when a
    /// notice does not carry one
    pub default_transaction_channel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_name: "interest-sweep".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            default_transaction_channel: "INTEREST REPAYMENT".to_string(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Load from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut config = Config::default();

        if let Ok(channel) = std::env::var("SWEEP_DEFAULT_CHANNEL") {
            config.default_transaction_channel = channel;
        }

        if let Ok(name) = std::env::var("SWEEP_SERVICE_NAME") {
            config.service_name = name;
        }

        Ok(config)
    }
}
