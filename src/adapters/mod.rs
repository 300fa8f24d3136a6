//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `razorpay` - Payment gateway client and test double
//! - `http` - Axum REST API

pub mod http;
pub mod razorpay;
