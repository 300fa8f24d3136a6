//! HTTP handlers for payment endpoints.
//!
//! These handlers connect Axum routes to the order and verification command
//! handlers and convert every failure into the response shape the browser
//! checkout page expects.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::payment::{
    CreateOrderCommand, CreateOrderHandler, VerifyPaymentHandler,
};
use crate::domain::payment::{Currency, PaymentError, PaymentSignatureVerifier};
use crate::ports::PaymentGateway;

use super::dto::{
    CheckoutConfigResponse, CreateOrderBody, ErrorResponse, HealthResponse, VerificationResponse,
    VerifyPaymentBody, INVALID_BODY, ORDER_FAILED,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies.
///
/// Immutable after startup; cloned per request.
#[derive(Clone)]
pub struct PaymentAppState {
    pub gateway: Arc<dyn PaymentGateway>,
    pub verifier: Arc<PaymentSignatureVerifier>,
    pub checkout: CheckoutSettings,
}

/// Public checkout settings handed to the browser widget.
#[derive(Debug, Clone)]
pub struct CheckoutSettings {
    pub key_id: String,
    pub currency: Currency,
}

impl PaymentAppState {
    pub fn new(
        gateway: Arc<dyn PaymentGateway>,
        verifier: Arc<PaymentSignatureVerifier>,
        key_id: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            verifier,
            checkout: CheckoutSettings {
                key_id: key_id.into(),
                currency: Currency::default(),
            },
        }
    }

    pub fn create_order_handler(&self) -> CreateOrderHandler {
        CreateOrderHandler::new(self.gateway.clone())
    }

    pub fn verify_payment_handler(&self) -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(self.verifier.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /create-order - Create a gateway order for the given amount
pub async fn create_order(
    State(state): State<PaymentAppState>,
    payload: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<impl IntoResponse, OrderApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected create-order body");
        PaymentError::invalid_request(INVALID_BODY)
    })?;

    let handler = state.create_order_handler();
    let result = handler
        .handle(CreateOrderCommand {
            amount: body.amount,
        })
        .await?;

    Ok(Json(result.order.body))
}

/// POST /verify-payment - Verify a checkout confirmation signature
pub async fn verify_payment(
    State(state): State<PaymentAppState>,
    payload: Result<Json<VerifyPaymentBody>, JsonRejection>,
) -> Result<impl IntoResponse, VerificationApiError> {
    let Json(body) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected verify-payment body");
        PaymentError::invalid_request(INVALID_BODY)
    })?;

    let verification = body.into_verification().map_err(|e| {
        if e.is_server_fault() {
            tracing::error!(error = %e, "Payment verification error");
        } else {
            tracing::debug!(error = %e, "Rejected verify-payment request");
        }
        e
    })?;

    let handler = state.verify_payment_handler();
    handler.handle(&verification)?;

    Ok(Json(VerificationResponse::success()))
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /checkout-config - Public key id and currency for the checkout widget
pub async fn get_checkout_config(State(state): State<PaymentAppState>) -> impl IntoResponse {
    Json(CheckoutConfigResponse {
        key_id: state.checkout.key_id.clone(),
        currency: state.checkout.currency,
    })
}

/// GET /health - Liveness check
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// Order endpoint error. Server-side detail never reaches the caller.
#[derive(Debug)]
pub struct OrderApiError(PaymentError);

impl From<PaymentError> for OrderApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for OrderApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self.0 {
            PaymentError::InvalidRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::new(message))
            }
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new(ORDER_FAILED),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Verification endpoint error.
#[derive(Debug)]
pub struct VerificationApiError(PaymentError);

impl From<PaymentError> for VerificationApiError {
    fn from(err: PaymentError) -> Self {
        Self(err)
    }
}

impl IntoResponse for VerificationApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.0.status_code();
        let body = match self.0 {
            PaymentError::VerificationMismatch => VerificationResponse::failed(),
            PaymentError::InvalidRequest(message) => VerificationResponse::invalid(message),
            PaymentError::VerificationError(_) | PaymentError::UpstreamFailure(_) => {
                VerificationResponse::error()
            }
        };
        (status, Json(body)).into_response()
    }
}
