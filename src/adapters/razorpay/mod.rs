//! Razorpay payment gateway adapter.
//!
//! Implements the `PaymentGateway` port for Razorpay, including:
//! - Order creation via the Orders API
//! - Mapping of Razorpay error envelopes to gateway errors
//!
//! Checkout signature verification does not call Razorpay and lives in
//! `domain::payment::PaymentSignatureVerifier`.
//!
//! # Configuration
//!
//! Required environment variables:
//! - `CHECKOUT__PAYMENT__RAZORPAY_KEY_ID`: Razorpay key id (rzp_...)
//! - `CHECKOUT__PAYMENT__RAZORPAY_KEY_SECRET`: Razorpay key secret

mod mock_gateway;
mod order_types;
mod razorpay_adapter;

pub use mock_gateway::MockPaymentGateway;
pub use order_types::{RazorpayErrorDetail, RazorpayErrorResponse, RazorpayOrderRequest};
pub use razorpay_adapter::{RazorpayConfig, RazorpayGatewayAdapter, DEFAULT_API_BASE_URL};
