//! Payment-specific error types.
//!
//! Every failure of the order and verification operations is converted into
//! one of these variants at the operation boundary.
//!
//! # HTTP Status Mapping
//!
//! | Error | HTTP Status |
//! |-------|-------------|
//! | InvalidRequest | 400 |
//! | UpstreamFailure | 500 |
//! | VerificationMismatch | 400 |
//! | VerificationError | 500 |

use axum::http::StatusCode;
use thiserror::Error;

/// Errors produced by order creation and payment verification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    /// Caller omitted or malformed a required field.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The payment gateway call failed (network, auth, rate limit, provider).
    #[error("Upstream failure: {0}")]
    UpstreamFailure(String),

    /// Recomputed signature does not match the supplied one.
    #[error("Payment signature mismatch")]
    VerificationMismatch,

    /// Signature could not be computed.
    #[error("Verification error: {0}")]
    VerificationError(String),
}

impl PaymentError {
    pub fn invalid_request(message: impl Into<String>) -> Self {
        PaymentError::InvalidRequest(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        PaymentError::UpstreamFailure(message.into())
    }

    pub fn verification(message: impl Into<String>) -> Self {
        PaymentError::VerificationError(message.into())
    }

    /// HTTP status class for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            PaymentError::InvalidRequest(_) | PaymentError::VerificationMismatch => {
                StatusCode::BAD_REQUEST
            }
            PaymentError::UpstreamFailure(_) | PaymentError::VerificationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns true for failures on our side or the gateway's, which are
    /// logged as faults. Caller mistakes and mismatches are not.
    pub fn is_server_fault(&self) -> bool {
        self.status_code().is_server_error()
    }
}
