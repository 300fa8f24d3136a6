//! Payment gateway port for order creation.
//!
//! Defines the contract for the third-party gateway that creates orders and
//! hosts the checkout widget. The gateway is treated as an opaque remote
//! service: this crate only asks it for new orders and relays what it returns.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::payment::{Currency, PaymentError, ReceiptToken};

/// Port for payment gateway integrations.
///
/// Implementations perform exactly one remote call per invocation and never
/// retry; callers re-initiate on failure.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create a new order record on the gateway.
    async fn create_order(&self, request: CreateOrderRequest) -> Result<GatewayOrder, GatewayError>;
}

/// Request to create an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in minor units (paise).
    pub amount: i64,

    /// Currency of the order.
    pub currency: Currency,

    /// Caller-side reference for reconciliation.
    pub receipt: ReceiptToken,
}

/// Order created by the gateway.
///
/// The typed fields are extracted for logging; `body` is the gateway's
/// response exactly as received and is what callers get back.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayOrder {
    /// Gateway order ID (`order_...`).
    pub id: String,

    /// Amount in minor units.
    pub amount: i64,

    /// Currency code reported by the gateway.
    pub currency: String,

    /// Receipt echoed back by the gateway.
    pub receipt: Option<String>,

    /// Order status (`created`, `attempted`, `paid`).
    pub status: String,

    /// Raw response body.
    pub body: Value,
}

impl GatewayOrder {
    /// Extract an order from a raw gateway response body.
    pub fn from_body(body: Value) -> Result<Self, GatewayError> {
        #[derive(Deserialize)]
        struct OrderFields {
            id: String,
            amount: i64,
            currency: String,
            #[serde(default)]
            receipt: Option<String>,
            #[serde(default)]
            status: String,
        }

        let fields: OrderFields = serde_json::from_value(body.clone()).map_err(|e| {
            GatewayError::new(
                GatewayErrorCode::InvalidResponse,
                format!("Order response missing fields: {}", e),
            )
        })?;

        Ok(Self {
            id: fields.id,
            amount: fields.amount,
            currency: fields.currency,
            receipt: fields.receipt,
            status: fields.status,
            body,
        })
    }
}

/// Errors from payment gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayError {
    /// Error code for categorization.
    pub code: GatewayErrorCode,

    /// Human-readable message.
    pub message: String,

    /// Gateway's error code (if available).
    pub provider_code: Option<String>,
}

impl GatewayError {
    /// Create a new gateway error.
    pub fn new(code: GatewayErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            provider_code: None,
        }
    }

    /// Create with provider code.
    pub fn with_provider_code(mut self, code: impl Into<String>) -> Self {
        self.provider_code = Some(code.into());
        self
    }

    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::NetworkError, message)
    }

    /// Create an authentication error.
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::AuthenticationError, message)
    }

    /// Create a rate limit error.
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::RateLimitExceeded, message)
    }

    /// Create a provider error.
    pub fn provider(message: impl Into<String>) -> Self {
        Self::new(GatewayErrorCode::ProviderError, message)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if let Some(provider_code) = &self.provider_code {
            write!(f, " ({})", provider_code)?;
        }
        Ok(())
    }
}

impl std::error::Error for GatewayError {}

impl From<GatewayError> for PaymentError {
    fn from(err: GatewayError) -> Self {
        PaymentError::upstream(err.to_string())
    }
}

/// Gateway error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GatewayErrorCode {
    /// Network connectivity issue or timeout.
    NetworkError,

    /// API key rejected.
    AuthenticationError,

    /// Rate limit exceeded.
    RateLimitExceeded,

    /// Gateway rejected the request or failed internally.
    ProviderError,

    /// Gateway response could not be understood.
    InvalidResponse,
}

impl std::fmt::Display for GatewayErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            GatewayErrorCode::NetworkError => "network_error",
            GatewayErrorCode::AuthenticationError => "authentication_error",
            GatewayErrorCode::RateLimitExceeded => "rate_limit_exceeded",
            GatewayErrorCode::ProviderError => "provider_error",
            GatewayErrorCode::InvalidResponse => "invalid_response",
        };
        write!(f, "{}", s)
    }
}
