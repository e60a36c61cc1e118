//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Configuration is loaded with the
//! `BANKER__` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use banker_agent::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod error;
mod negotiation;
mod server;

pub use ai::AiConfig;
pub use error::{ConfigError, ValidationError};
pub use negotiation::NegotiationConfig;
pub use server::ServerConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, timeouts, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// ASI-One provider configuration
    #[serde(default)]
    pub ai: AiConfig,

    /// Negotiation rulebook tunables
    #[serde(default)]
    pub negotiation: NegotiationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `BANKER` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `BANKER__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `BANKER__AI__ASI_ONE_API_KEY=...` -> `ai.asi_one_api_key = ...`
    /// - `BANKER__NEGOTIATION__EARLY_ROUND_MULTIPLIER=0.6`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into their types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BANKER")
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
        self.ai.validate()?;
        self.negotiation.validate()?;
        Ok(())
    }
}
