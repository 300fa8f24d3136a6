//! Axum router configuration for payment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    create_order, get_checkout_config, health, verify_payment, PaymentAppState,
};

/// Create the payment API router.
///
/// # Routes
///
/// - `POST /create-order` - Create a gateway order
/// - `POST /verify-payment` - Verify a checkout signature
/// - `GET /checkout-config` - Public checkout settings
/// - `GET /health` - Liveness check
pub fn payment_router() -> Router<PaymentAppState> {
    Router::new()
        .route("/create-order", post(create_order))
        .route("/verify-payment", post(verify_payment))
        .route("/checkout-config", get(get_checkout_config))
        .route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::adapters::razorpay::MockPaymentGateway;
    use crate::domain::payment::PaymentSignatureVerifier;

    fn app() -> Router {
        let state = PaymentAppState::new(
            Arc::new(MockPaymentGateway::new()),
            Arc::new(PaymentSignatureVerifier::new("s3cr3t")),
            "rzp_test_key",
        );
        payment_router().with_state(state)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn router_mounts_create_order() {
        let response = app()
            .oneshot(post_json("/create-order", r#"{"amount": 1}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn router_mounts_verify_payment() {
        let response = app()
            .oneshot(post_json(
                "/verify-payment",
                r#"{"razorpay_order_id":"o","razorpay_payment_id":"p","razorpay_signature":"s"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"status": "failed"}));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let response = app()
            .oneshot(post_json("/create-order", "{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "Invalid request body"})
        );
    }

    #[tokio::test]
    async fn checkout_config_exposes_key_id_only() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/checkout-config")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!({"key_id": "rzp_test_key", "currency": "INR"})
        );
    }

    #[tokio::test]
    async fn health_is_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn get_on_create_order_is_not_allowed() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/create-order")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
