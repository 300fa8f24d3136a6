//! HTTP listener settings and the browser-facing policy derived from them.
//!
//! The checkout page calls this service from the browser, so besides the bind
//! address the settings here decide which origins may call it and how long a
//! single request (including the gateway round trip) may take.

use std::net::SocketAddr;
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Upper bound for `request_timeout_secs`.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Listener configuration, read from `CHECKOUT__SERVER__*`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,

    /// Whole-request budget. Must exceed the gateway timeout to be useful.
    pub request_timeout_secs: u64,

    /// Comma-separated origins allowed to call the API from a browser.
    pub cors_origins: Option<String>,
}

/// Deployment stage. Selects log format and the fallback CORS policy.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Whether browsers on any origin may call the API when no origins are
    /// configured. Only local development is that permissive.
    pub fn allows_any_origin(&self) -> bool {
        matches!(self, Environment::Development)
    }
}

/// Which browser origins the router accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Exactly these origins.
    AllowList(Vec<String>),
    /// Any origin (development without an explicit list).
    AnyOrigin,
    /// No cross-origin access; the checkout page must be served same-origin.
    SameOriginOnly,
}

impl ServerConfig {
    /// Address the listener binds to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured origins, trimmed, with blanks dropped.
    fn configured_origins(&self) -> Vec<String> {
        self.cors_origins
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Resolve the CORS policy: an explicit list always wins, otherwise the
    /// environment decides.
    pub fn cors_policy(&self) -> CorsPolicy {
        let origins = self.configured_origins();
        if !origins.is_empty() {
            CorsPolicy::AllowList(origins)
        } else if self.environment.allows_any_origin() {
            CorsPolicy::AnyOrigin
        } else {
            CorsPolicy::SameOriginOnly
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        self.socket_addr()?;

        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }

        // Origins are scheme://host[:port]; a path or trailing slash never
        // matches the browser's Origin header.
        for origin in self.configured_origins() {
            let rest = origin
                .strip_prefix("https://")
                .or_else(|| origin.strip_prefix("http://"));
            match rest {
                Some(authority) if !authority.is_empty() && !authority.contains('/') => {}
                _ => return Err(ValidationError::InvalidCorsOrigin(origin)),
            }
        }

        Ok(())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,razorpay_checkout=debug,tower_http=info".to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
        }
    }
}
