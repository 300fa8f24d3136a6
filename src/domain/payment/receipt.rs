//! Receipt tokens attached to gateway orders.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix of every generated receipt.
const RECEIPT_PREFIX: &str = "rcpt_";

/// Longest receipt the gateway accepts.
pub const MAX_RECEIPT_LEN: usize = 40;

/// Caller-side reference sent along with each order.
///
/// Generated from a random UUID so that concurrent requests never share a
/// receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptToken(String);

impl ReceiptToken {
    /// Generates a fresh receipt, `rcpt_` followed by 32 hex digits.
    pub fn generate() -> Self {
        Self(format!("{}{}", RECEIPT_PREFIX, Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReceiptToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
