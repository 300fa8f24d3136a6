//! Mock payment gateway for testing.
//!
//! Provides a configurable in-memory implementation of `PaymentGateway` for
//! unit and integration tests. Supports:
//! - Orders synthesised from the request
//! - Error injection
//! - Request tracking

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::ports::{CreateOrderRequest, GatewayError, GatewayOrder, PaymentGateway};

/// Mock payment gateway for testing.
///
/// # Example
///
/// ```ignore
/// let mock = MockPaymentGateway::new();
/// mock.set_error(GatewayError::network("Test outage"));
///
/// let result = mock.create_order(request).await;
/// assert_eq!(mock.requests().len(), 1);
/// ```
#[derive(Default, Clone)]
pub struct MockPaymentGateway {
    inner: Arc<Mutex<MockState>>,
}

#[derive(Default)]
struct MockState {
    /// Requests received, in order.
    requests: Vec<CreateOrderRequest>,

    /// Error returned by every call while set.
    error: Option<GatewayError>,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `error`.
    pub fn set_error(&self, error: GatewayError) {
        self.lock().error = Some(error);
    }

    /// Clear any injected error.
    pub fn clear_error(&self) {
        self.lock().error = None;
    }

    /// All requests received so far.
    pub fn requests(&self) -> Vec<CreateOrderRequest> {
        self.lock().requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MockState> {
        // A poisoned lock only means another test thread panicked mid-call.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn order_body(sequence: usize, request: &CreateOrderRequest) -> Value {
        json!({
            "id": format!("order_mock{:06}", sequence),
            "entity": "order",
            "amount": request.amount,
            "amount_paid": 0,
            "amount_due": request.amount,
            "currency": request.currency.code(),
            "receipt": request.receipt.as_str(),
            "status": "created",
            "attempts": 0,
            "notes": [],
            "created_at": 1_700_000_000 + sequence as i64
        })
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(&self, request: CreateOrderRequest) -> Result<GatewayOrder, GatewayError> {
        let mut state = self.lock();
        state.requests.push(request.clone());

        if let Some(error) = &state.error {
            return Err(error.clone());
        }

        let body = Self::order_body(state.requests.len(), &request);
        GatewayOrder::from_body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::{Currency, ReceiptToken};
    use crate::ports::GatewayErrorCode;

    fn request(amount: i64) -> CreateOrderRequest {
        CreateOrderRequest {
            amount,
            currency: Currency::Inr,
            receipt: ReceiptToken::generate(),
        }
    }

    #[tokio::test]
    async fn returns_order_echoing_request() {
        let mock = MockPaymentGateway::new();
        let req = request(1234);

        let order = mock.create_order(req.clone()).await.unwrap();

        assert_eq!(order.id, "order_mock000001");
        assert_eq!(order.amount, 1234);
        assert_eq!(order.currency, "INR");
        assert_eq!(order.receipt.as_deref(), Some(req.receipt.as_str()));
        assert_eq!(order.status, "created");
    }

    #[tokio::test]
    async fn injected_error_is_returned_and_request_recorded() {
        let mock = MockPaymentGateway::new();
        mock.set_error(GatewayError::rate_limited("slow down"));

        let err = mock.create_order(request(100)).await.unwrap_err();

        assert_eq!(err.code, GatewayErrorCode::RateLimitExceeded);
        assert_eq!(mock.requests().len(), 1);

        mock.clear_error();
        assert!(mock.create_order(request(100)).await.is_ok());
    }
}
