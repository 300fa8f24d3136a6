//! Payment domain - order amounts, receipts and signature verification.
//!
//! # Module Structure
//!
//! - `amount` - Major/minor unit conversion and the fixed order currency
//! - `receipt` - Collision-resistant receipt tokens for gateway orders
//! - `signature` - HMAC-SHA256 verification of checkout confirmations
//! - `errors` - Error taxonomy shared by both payment operations

mod amount;
mod errors;
mod receipt;
mod signature;

pub use amount::{Currency, OrderAmount, AMOUNT_NOT_POSITIVE, AMOUNT_REQUIRED};
pub use errors::PaymentError;
pub use receipt::{ReceiptToken, MAX_RECEIPT_LEN};
pub use signature::{PaymentSignatureVerifier, PaymentVerification, VerificationOutcome};

#[cfg(test)]
pub use signature::compute_test_signature;
