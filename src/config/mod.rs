//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `RIDER_PURCHASES` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a runnable service.
//!
//! # Example
//!
//! ```no_run
//! use rider_purchases::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.socket_addr());
//! ```

mod catalog;
mod error;
mod marketplace;
mod server;
mod storage;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use marketplace::MarketplaceConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;
use std::env;

const ENV_PREFIX: &str = "RIDER_PURCHASES";

/// Unprefixed variables honoured for deployments that predate the prefix.
/// Prefixed variables take precedence over them.
const LEGACY_VARS: &[(&str, &str)] = &[
    ("PORT", "server.port"),
    ("AMAZON_AFFILIATE_TAG", "marketplace.associate_tag"),
    ("AMAZON_ASSOCIATE_TAG", "marketplace.associate_tag"),
];

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, logging, limits)
    #[serde(default)]
    pub server: ServerConfig,

    /// Marketplace search link configuration
    #[serde(default)]
    pub marketplace: MarketplaceConfig,

    /// Profile storage backend
    #[serde(default)]
    pub storage: StorageConfig,

    /// Product catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Applies the legacy unprefixed variables as defaults
    /// 3. Reads environment variables with `RIDER_PURCHASES` prefix
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `RIDER_PURCHASES__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `RIDER_PURCHASES__STORAGE__BACKEND=file` -> `storage.backend = file`
    /// - `PORT=8080` -> `server.port = 8080` unless the prefixed form is set
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        // Later entries in the table win over earlier ones.
        for (var, key) in LEGACY_VARS {
            if let Some(value) = legacy_value(var) {
                builder = builder.set_default(*key, value)?;
            }
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.marketplace.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

fn legacy_value(var: &str) -> Option<String> {
    env::var(var)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
