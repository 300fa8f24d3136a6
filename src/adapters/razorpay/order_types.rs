//! Razorpay Orders API wire types.

use serde::{Deserialize, Serialize};

use crate::ports::CreateOrderRequest;

/// Body of `POST /v1/orders`.
#[derive(Debug, Clone, Serialize)]
pub struct RazorpayOrderRequest {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
}

impl From<&CreateOrderRequest> for RazorpayOrderRequest {
    fn from(request: &CreateOrderRequest) -> Self {
        Self {
            amount: request.amount,
            currency: request.currency.code().to_string(),
            receipt: request.receipt.to_string(),
        }
    }
}

/// Error envelope returned by the Razorpay API.
#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorResponse {
    pub error: RazorpayErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayErrorDetail {
    /// e.g. `BAD_REQUEST_ERROR`, `GATEWAY_ERROR`, `SERVER_ERROR`.
    pub code: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub field: Option<String>,
}

impl RazorpayErrorResponse {
    /// Parses an error body, returning `None` for non-JSON responses.
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{Currency, ReceiptToken};

    #[test]
    fn order_request_uses_currency_code() {
        let receipt = ReceiptToken::generate();
        let request = CreateOrderRequest {
            amount: 1000,
            currency: Currency::Inr,
            receipt: receipt.clone(),
        };

        let wire = RazorpayOrderRequest::from(&request);
        let json = serde_json::to_value(&wire).unwrap();

        assert_eq!(json["amount"], 1000);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["receipt"], receipt.as_str());
    }

    #[test]
    fn parses_error_envelope() {
        let body = r#"{"error":{"code":"BAD_REQUEST_ERROR","description":"The amount must be atleast INR 1.00","source":"business","step":"payment_initiation","reason":"input_validation_failed","metadata":{},"field":"amount"}}"#;

        let parsed = RazorpayErrorResponse::parse(body).unwrap();

        assert_eq!(parsed.error.code, "BAD_REQUEST_ERROR");
        assert_eq!(parsed.error.field.as_deref(), Some("amount"));
        assert!(parsed.error.description.unwrap().contains("INR 1.00"));
    }

    #[test]
    fn non_json_error_is_none() {
        assert!(RazorpayErrorResponse::parse("<html>502</html>").is_none());
    }
}
