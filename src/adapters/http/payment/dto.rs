//! HTTP DTOs (Data Transfer Objects) for payment endpoints.
//!
//! These types define the JSON request/response structure consumed by the
//! browser checkout page. Field names follow the Razorpay checkout handler
//! response so the browser can forward it unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::payment::{Currency, PaymentError, PaymentVerification};

/// Message returned when a request body is not valid JSON.
pub const INVALID_BODY: &str = "Invalid request body";

/// Message returned for any order creation failure on the server side.
pub const ORDER_FAILED: &str = "Failed to create order";

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to create an order.
///
/// `amount` is kept as raw JSON so that falsy and string values can be
/// interpreted the way the browser sends them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderBody {
    #[serde(default)]
    pub amount: Option<Value>,
}

/// Request to verify a completed checkout.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VerifyPaymentBody {
    #[serde(default)]
    pub razorpay_order_id: Option<Value>,
    #[serde(default)]
    pub razorpay_payment_id: Option<Value>,
    #[serde(default)]
    pub razorpay_signature: Option<Value>,
}

impl VerifyPaymentBody {
    /// Convert into a domain verification request.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` - a field is missing, null or empty
    /// - `VerificationError` - a field is not a string
    pub fn into_verification(self) -> Result<PaymentVerification, PaymentError> {
        Ok(PaymentVerification {
            order_id: required_string("razorpay_order_id", self.razorpay_order_id)?,
            payment_id: required_string("razorpay_payment_id", self.razorpay_payment_id)?,
            signature: required_string("razorpay_signature", self.razorpay_signature)?,
        })
    }
}

fn required_string(field: &str, value: Option<Value>) -> Result<String, PaymentError> {
    match value {
        None | Some(Value::Null) => Err(PaymentError::invalid_request(format!(
            "{} is required",
            field
        ))),
        Some(Value::String(s)) if s.is_empty() => Err(PaymentError::invalid_request(format!(
            "{} is required",
            field
        ))),
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(PaymentError::verification(format!(
            "{} must be a string, got {}",
            field,
            json_type(&other)
        ))),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Error body for order endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Verification status reported to the browser.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Success,
    Failed,
    Error,
}

/// Response for payment verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationResponse {
    pub status: VerificationStatus,

    /// Explanation for invalid requests only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VerificationResponse {
    pub fn success() -> Self {
        Self {
            status: VerificationStatus::Success,
            error: None,
        }
    }

    pub fn failed() -> Self {
        Self {
            status: VerificationStatus::Failed,
            error: None,
        }
    }

    pub fn error() -> Self {
        Self {
            status: VerificationStatus::Error,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            status: VerificationStatus::Error,
            error: Some(message.into()),
        }
    }
}

/// Public checkout settings for the browser widget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutConfigResponse {
    pub key_id: String,
    pub currency: Currency,
}

/// Liveness response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}
