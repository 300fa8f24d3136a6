//! HTTP adapter for payment endpoints.
//!
//! Exposes the payment flow via REST API:
//! - `POST /create-order` - Create a gateway order for an amount
//! - `POST /verify-payment` - Verify the checkout confirmation signature
//! - `GET /checkout-config` - Public checkout settings for the browser widget
//! - `GET /health` - Liveness check

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::{CheckoutSettings, OrderApiError, PaymentAppState, VerificationApiError};
pub use routes::payment_router;
