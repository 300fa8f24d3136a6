//! Order amounts and their conversion to gateway minor units.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::PaymentError;

/// Message returned when the amount is absent or falsy.
pub const AMOUNT_REQUIRED: &str = "Amount is required";

/// Message returned when the amount is present but unusable.
pub const AMOUNT_NOT_POSITIVE: &str = "Amount must be a positive number";

/// Currencies accepted by this service.
///
/// Orders are always placed in a single fixed currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "INR")]
    Inr,
}

impl Currency {
    /// ISO 4217 code sent to the gateway.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
        }
    }

    /// Number of minor units (paise) per major unit (rupee).
    pub fn subunit_factor(&self) -> u32 {
        match self {
            Currency::Inr => 100,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A positive order amount in major currency units.
///
/// The minor-unit value is computed once on construction, so an
/// `OrderAmount` always converts to a positive integer the gateway accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderAmount {
    major: Decimal,
    minor: i64,
    currency: Currency,
}

impl OrderAmount {
    /// Creates an amount in the default currency.
    pub fn new(major: Decimal) -> Result<Self, PaymentError> {
        Self::in_currency(major, Currency::default())
    }

    pub fn in_currency(major: Decimal, currency: Currency) -> Result<Self, PaymentError> {
        if major <= Decimal::ZERO {
            return Err(PaymentError::invalid_request(AMOUNT_NOT_POSITIVE));
        }

        let minor = major
            .checked_mul(Decimal::from(currency.subunit_factor()))
            .map(|m| m.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
            .and_then(|m| m.to_i64())
            .filter(|m| *m > 0)
            .ok_or_else(|| PaymentError::invalid_request(AMOUNT_NOT_POSITIVE))?;

        Ok(Self {
            major,
            minor,
            currency,
        })
    }

    /// Interprets a raw JSON `amount` field the way a browser client sends it.
    ///
    /// Absent, `null`, `false`, `0` and `""` count as missing. Numbers and
    /// numeric strings are accepted. Anything else is rejected.
    pub fn from_json(value: Option<&Value>) -> Result<Self, PaymentError> {
        let required = || PaymentError::invalid_request(AMOUNT_REQUIRED);
        let not_positive = || PaymentError::invalid_request(AMOUNT_NOT_POSITIVE);

        let major = match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => return Err(required()),
            Some(Value::Number(n)) => {
                let decimal = parse_decimal(&n.to_string()).ok_or_else(not_positive)?;
                if decimal.is_zero() {
                    return Err(required());
                }
                decimal
            }
            Some(Value::String(s)) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(required());
                }
                parse_decimal(trimmed).ok_or_else(not_positive)?
            }
            Some(_) => return Err(not_positive()),
        };

        Self::new(major)
    }

    /// Amount in major units as supplied by the caller.
    pub fn major_units(&self) -> Decimal {
        self.major
    }

    /// Amount in the currency's smallest denomination.
    pub fn minor_units(&self) -> i64 {
        self.minor
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

/// Parses plain decimal or scientific notation. Digit separators and other
/// characters `Decimal` would otherwise tolerate are refused.
fn parse_decimal(s: &str) -> Option<Decimal> {
    let plain = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
    if !plain {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
