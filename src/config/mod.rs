//! Application configuration module
//!
//! Configuration is read once at startup from environment variables (and an
//! optional `.env` file in development) using the `config` and `dotenvy`
//! crates, then treated as immutable. Variables use the `CHECKOUT` prefix and
//! `__` between nested keys. Gateway credentials are never compiled in.
//!
//! # Example
//!
//! ```no_run
//! use razorpay_checkout::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod payment;
mod server;

pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{CorsPolicy, Environment, ServerConfig};

use serde::Deserialize;

/// Environment variable prefix
const ENV_PREFIX: &str = "CHECKOUT";

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Payment gateway configuration (Razorpay)
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `CHECKOUT__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CHECKOUT__PAYMENT__RAZORPAY_KEY_ID=rzp_live_...` -> `payment.razorpay_key_id`
    /// - `CHECKOUT__PAYMENT__RAZORPAY_KEY_SECRET=...` -> `payment.razorpay_key_secret`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed into the expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix(ENV_PREFIX)
                    .prefix_separator("__")
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
        self.payment.validate(&self.server.environment)?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
