//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `payment` - Order amounts, receipts, signature verification and errors

pub mod payment;
