// Configuration module

mod models;

pub use models::*;

use crate::error::{RelayError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. `PORT` environment variable (deployment platform convention)
    /// 2. Environment variables (`REPLYGEN_*`)
    /// 3. Config file
    /// 4. Defaults (lowest)
    ///
    /// CLI flags are applied on top by `main`.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: REPLYGEN_)
            .add_source(Environment::with_prefix("REPLYGEN").separator("_"))
            .build()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        let mut config: AppConfig = config
            .try_deserialize()
            .map_err(|e| RelayError::Config(e.to_string()))?;

        // Hosting platforms hand out the port through the bare PORT variable
        if let Ok(port) = std::env::var("PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| RelayError::Config(format!("invalid PORT value: {}", port)))?;
        }

        Ok(config)
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".replygen")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}
