//! Razorpay payment signature verification.
//!
//! After checkout the gateway hands the browser an order id, a payment id and
//! a signature. The signature is the hex-encoded HMAC-SHA256 of
//! `order_id|payment_id` keyed with the account's key secret, so recomputing
//! it here proves the confirmation came from the gateway.

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::errors::PaymentError;

type HmacSha256 = Hmac<Sha256>;

/// Identifiers returned by the hosted checkout after a successful payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentVerification {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

/// Result of checking a payment signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    Authentic,
    NotAuthentic,
}

impl VerificationOutcome {
    pub fn is_authentic(&self) -> bool {
        matches!(self, VerificationOutcome::Authentic)
    }
}

/// Verifier for payment signatures issued by the gateway.
///
/// Holds only the shared secret and is safe to share across requests.
pub struct PaymentSignatureVerifier {
    secret: SecretString,
}

impl PaymentSignatureVerifier {
    /// Creates a verifier keyed with the gateway key secret.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: SecretString::new(secret.into()),
        }
    }

    /// Computes the lowercase hex signature the gateway would issue for this
    /// order and payment.
    ///
    /// # Errors
    ///
    /// Returns `PaymentError::VerificationError` if the MAC cannot be keyed.
    pub fn expected_signature(
        &self,
        order_id: &str,
        payment_id: &str,
    ) -> Result<String, PaymentError> {
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| PaymentError::verification(e.to_string()))?;
        mac.update(order_id.as_bytes());
        mac.update(b"|");
        mac.update(payment_id.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Checks the supplied signature against the recomputed one.
    ///
    /// A mismatch is an expected outcome and is returned as
    /// `VerificationOutcome::NotAuthentic`, not as an error.
    pub fn verify(
        &self,
        verification: &PaymentVerification,
    ) -> Result<VerificationOutcome, PaymentError> {
        let expected =
            self.expected_signature(&verification.order_id, &verification.payment_id)?;

        if constant_time_compare(expected.as_bytes(), verification.signature.as_bytes()) {
            Ok(VerificationOutcome::Authentic)
        } else {
            Ok(VerificationOutcome::NotAuthentic)
        }
    }
}

/// Performs constant-time comparison of two byte slices.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

/// Computes a gateway-style signature for use in test fixtures.
#[cfg(test)]
pub fn compute_test_signature(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TEST_SECRET: &str = "s3cr3t";

    fn verification(order_id: &str, payment_id: &str, signature: &str) -> PaymentVerification {
        PaymentVerification {
            order_id: order_id.to_string(),
            payment_id: payment_id.to_string(),
            signature: signature.to_string(),
        }
    }

    // ══════════════════════════════════════════════════════════════
    // Signature Computation Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn expected_signature_matches_reference_hmac() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);

        let expected = verifier.expected_signature("order_abc", "pay_xyz").unwrap();

        assert_eq!(
            expected,
            compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz")
        );
        assert_eq!(expected.len(), 64);
        assert!(expected.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn separator_is_part_of_signed_payload() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);

        let a = verifier.expected_signature("order_a", "bpay").unwrap();
        let b = verifier.expected_signature("order_ab", "pay").unwrap();

        assert_ne!(a, b);
    }

    #[test]
    fn empty_secret_still_produces_signature() {
        let verifier = PaymentSignatureVerifier::new("");
        assert!(verifier.expected_signature("order", "pay").is_ok());
    }

    // ══════════════════════════════════════════════════════════════
    // Verification Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_valid_signature() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        let outcome = verifier
            .verify(&verification("order_abc", "pay_xyz", &signature))
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::Authentic);
        assert!(outcome.is_authentic());
    }

    #[test]
    fn verify_wrong_signature_is_not_authentic() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);

        let outcome = verifier
            .verify(&verification("order_abc", "pay_xyz", "wrong"))
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::NotAuthentic);
    }

    #[test]
    fn verify_wrong_secret_is_not_authentic() {
        let verifier = PaymentSignatureVerifier::new("another_secret");
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        let outcome = verifier
            .verify(&verification("order_abc", "pay_xyz", &signature))
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::NotAuthentic);
    }

    #[test]
    fn verify_swapped_ids_is_not_authentic() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let signature = compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz");

        let outcome = verifier
            .verify(&verification("pay_xyz", "order_abc", &signature))
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::NotAuthentic);
    }

    #[test]
    fn verify_is_case_sensitive() {
        let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
        let signature =
            compute_test_signature(TEST_SECRET, "order_abc", "pay_xyz").to_uppercase();

        let outcome = verifier
            .verify(&verification("order_abc", "pay_xyz", &signature))
            .unwrap();

        assert_eq!(outcome, VerificationOutcome::NotAuthentic);
    }

    // ══════════════════════════════════════════════════════════════
    // Constant Time Comparison Tests
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn constant_time_compare_equal_values() {
        assert!(constant_time_compare(b"abcdef", b"abcdef"));
    }

    #[test]
    fn constant_time_compare_different_values() {
        assert!(!constant_time_compare(b"abcdef", b"abcdeg"));
    }

    #[test]
    fn constant_time_compare_different_lengths() {
        assert!(!constant_time_compare(b"abc", b"abcd"));
    }

    #[test]
    fn constant_time_compare_empty_slices() {
        assert!(constant_time_compare(b"", b""));
    }

    // ══════════════════════════════════════════════════════════════
    // Properties
    // ══════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn signature_is_deterministic(
            order_id in "order_[A-Za-z0-9]{1,20}",
            payment_id in "pay_[A-Za-z0-9]{1,20}",
        ) {
            let first = PaymentSignatureVerifier::new(TEST_SECRET)
                .expected_signature(&order_id, &payment_id)
                .unwrap();
            let second = PaymentSignatureVerifier::new(TEST_SECRET)
                .expected_signature(&order_id, &payment_id)
                .unwrap();

            prop_assert_eq!(first, second);
        }

        #[test]
        fn matching_signature_is_authentic(
            order_id in "[^|]{0,24}",
            payment_id in "[^|]{0,24}",
        ) {
            let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
            let signature = compute_test_signature(TEST_SECRET, &order_id, &payment_id);

            let outcome = verifier
                .verify(&verification(&order_id, &payment_id, &signature))
                .unwrap();

            prop_assert!(outcome.is_authentic());
        }

        #[test]
        fn single_character_perturbation_is_rejected(
            order_id in "order_[A-Za-z0-9]{1,20}",
            payment_id in "pay_[A-Za-z0-9]{1,20}",
            position in 0usize..64,
        ) {
            let verifier = PaymentSignatureVerifier::new(TEST_SECRET);
            let mut bytes = compute_test_signature(TEST_SECRET, &order_id, &payment_id).into_bytes();
            bytes[position] = if bytes[position] == b'0' { b'1' } else { b'0' };
            let tampered = String::from_utf8(bytes).unwrap();

            let outcome = verifier
                .verify(&verification(&order_id, &payment_id, &tampered))
                .unwrap();

            prop_assert_eq!(outcome, VerificationOutcome::NotAuthentic);
        }
    }
}
