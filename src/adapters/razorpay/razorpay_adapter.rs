//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` trait against the Razorpay Orders API.
//!
//! # Security
//!
//! - Requests authenticate with HTTP basic auth (`key_id:key_secret`)
//! - The key secret is held in a `secrecy::SecretString`
//!
//! # Configuration
//!
//! ```ignore
//! let config = RazorpayConfig::new(key_id, key_secret);
//! let adapter = RazorpayGatewayAdapter::new(config)?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::ports::{CreateOrderRequest, GatewayError, GatewayErrorCode, GatewayOrder, PaymentGateway};

use super::order_types::{RazorpayErrorDetail, RazorpayErrorResponse, RazorpayOrderRequest};

/// Default Razorpay API host.
pub const DEFAULT_API_BASE_URL: &str = "https://api.razorpay.com";

/// Default timeout for gateway calls.
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Razorpay API configuration.
pub struct RazorpayConfig {
    /// Public key identifier (`rzp_live_...` or `rzp_test_...`).
    key_id: String,

    /// Key secret, also used to sign checkout confirmations.
    key_secret: SecretString,

    /// Base URL for the Razorpay API.
    api_base_url: String,

    /// Timeout applied to each gateway call.
    timeout: Duration,
}

impl RazorpayConfig {
    /// Create a new Razorpay configuration.
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: SecretString::new(key_secret.into()),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set a custom API base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Set the per-call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }
}

/// Razorpay payment gateway adapter.
pub struct RazorpayGatewayAdapter {
    config: RazorpayConfig,
    http_client: reqwest::Client,
}

impl RazorpayGatewayAdapter {
    /// Create a new adapter with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns a network error if the HTTP client cannot be initialised.
    pub fn new(config: RazorpayConfig) -> Result<Self, GatewayError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GatewayError::network(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    fn orders_url(&self) -> String {
        format!("{}/v1/orders", self.config.api_base_url.trim_end_matches('/'))
    }
}

/// Map a non-success response to a gateway error.
fn error_from_response(status: StatusCode, body: &str) -> GatewayError {
    let detail = RazorpayErrorResponse::parse(body).map(|r| r.error);
    let message = match detail.as_ref() {
        Some(RazorpayErrorDetail {
            description: Some(description),
            field: Some(field),
            ..
        }) => format!("{}: {}", field, description),
        Some(RazorpayErrorDetail {
            description: Some(description),
            ..
        }) => description.clone(),
        _ => format!("Razorpay API error ({}): {}", status, body),
    };

    let error = match status {
        StatusCode::UNAUTHORIZED => GatewayError::authentication(message),
        StatusCode::TOO_MANY_REQUESTS => GatewayError::rate_limited(message),
        _ => GatewayError::provider(message),
    };

    match detail {
        Some(d) => error.with_provider_code(d.code),
        None => error,
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGatewayAdapter {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<GatewayOrder, GatewayError> {
        let url = self.orders_url();
        let body = RazorpayOrderRequest::from(&request);

        tracing::debug!(
            key_id = self.config.key_id(),
            receipt = %request.receipt,
            amount = request.amount,
            "Sending Razorpay create order request"
        );

        let response = self
            .http_client
            .post(&url)
            .basic_auth(self.config.key_id(), Some(self.config.key_secret.expose_secret()))
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(
                status = status.as_u16(),
                error = %error_text,
                "Razorpay create_order failed"
            );
            return Err(error_from_response(status, &error_text));
        }

        let order_body: Value = response.json().await.map_err(|e| {
            GatewayError::new(
                GatewayErrorCode::InvalidResponse,
                format!("Failed to parse Razorpay response: {}", e),
            )
        })?;

        GatewayOrder::from_body(order_body)
    }
}
