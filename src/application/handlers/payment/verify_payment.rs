//! VerifyPaymentHandler - Command handler for confirming checkout signatures.

use std::sync::Arc;

use crate::domain::payment::{
    PaymentError, PaymentSignatureVerifier, PaymentVerification, VerificationOutcome,
};

/// Handler for verifying a completed checkout.
///
/// Stateless: the result depends only on the command and the verifier's
/// secret, so concurrent calls never affect each other.
pub struct VerifyPaymentHandler {
    verifier: Arc<PaymentSignatureVerifier>,
}

impl VerifyPaymentHandler {
    pub fn new(verifier: Arc<PaymentSignatureVerifier>) -> Self {
        Self { verifier }
    }

    /// Returns `Ok(())` when the signature is authentic.
    ///
    /// # Errors
    ///
    /// - `VerificationMismatch` - signature does not match
    /// - `VerificationError` - signature could not be computed
    pub fn handle(&self, cmd: &PaymentVerification) -> Result<(), PaymentError> {
        let outcome = self.verifier.verify(cmd).map_err(|e| {
            tracing::error!(
                error = %e,
                order_id = %cmd.order_id,
                payment_id = %cmd.payment_id,
                "Payment verification error"
            );
            e
        })?;

        match outcome {
            VerificationOutcome::Authentic => {
                tracing::info!(
                    order_id = %cmd.order_id,
                    payment_id = %cmd.payment_id,
                    "Payment verified"
                );
                Ok(())
            }
            VerificationOutcome::NotAuthentic => {
                tracing::warn!(
                    order_id = %cmd.order_id,
                    payment_id = %cmd.payment_id,
                    "Payment signature mismatch"
                );
                Err(PaymentError::VerificationMismatch)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment::compute_test_signature;

    const SECRET: &str = "s3cr3t";

    fn handler() -> VerifyPaymentHandler {
        VerifyPaymentHandler::new(Arc::new(PaymentSignatureVerifier::new(SECRET)))
    }

    fn command(signature: String) -> PaymentVerification {
        PaymentVerification {
            order_id: "order_abc".to_string(),
            payment_id: "pay_xyz".to_string(),
            signature,
        }
    }

    #[test]
    fn authentic_signature_succeeds() {
        let signature = compute_test_signature(SECRET, "order_abc", "pay_xyz");
        assert!(handler().handle(&command(signature)).is_ok());
    }

    #[test]
    fn wrong_signature_is_mismatch() {
        let result = handler().handle(&command("wrong".to_string()));
        assert_eq!(result, Err(PaymentError::VerificationMismatch));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_verifications_do_not_interfere() {
        const TASKS: usize = 64;
        let handler = Arc::new(handler());
        let start = Arc::new(tokio::sync::Barrier::new(TASKS));

        let tasks: Vec<_> = (0..TASKS)
            .map(|i| {
                let handler = handler.clone();
                let start = start.clone();
                tokio::spawn(async move {
                    let order_id = format!("order_{}", i);
                    let payment_id = format!("pay_{}", i);
                    let signature = if i % 2 == 0 {
                        compute_test_signature(SECRET, &order_id, &payment_id)
                    } else {
                        compute_test_signature(SECRET, &payment_id, &order_id)
                    };
                    let cmd = PaymentVerification {
                        order_id,
                        payment_id,
                        signature,
                    };

                    // Release every task together so workers verify in parallel.
                    start.wait().await;
                    (0..200)
                        .map(|_| handler.handle(&cmd))
                        .map(|result| (i, result))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        for task in tasks {
            for (i, result) in task.await.unwrap() {
                if i % 2 == 0 {
                    assert!(result.is_ok(), "verification {} should succeed", i);
                } else {
                    assert_eq!(result, Err(PaymentError::VerificationMismatch));
                }
            }
        }
    }
}
