//! CreateOrderHandler - Command handler for creating gateway orders.

use std::sync::Arc;

use serde_json::Value;

use crate::domain::payment::{OrderAmount, PaymentError, ReceiptToken};
use crate::ports::{CreateOrderRequest, GatewayOrder, PaymentGateway};

/// Command to create an order for the given amount.
#[derive(Debug, Clone)]
pub struct CreateOrderCommand {
    /// Raw `amount` field from the caller, in major units.
    pub amount: Option<Value>,
}

/// Result of successful order creation.
#[derive(Debug, Clone)]
pub struct CreateOrderResult {
    pub order: GatewayOrder,
    pub receipt: ReceiptToken,
}

/// Handler for creating orders on the payment gateway.
///
/// The amount is validated before the gateway is contacted. Gateway failures
/// are logged in full here and surface as `PaymentError::UpstreamFailure`.
pub struct CreateOrderHandler {
    gateway: Arc<dyn PaymentGateway>,
}

impl CreateOrderHandler {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, cmd: CreateOrderCommand) -> Result<CreateOrderResult, PaymentError> {
        // 1. Validate and convert amount
        let amount = OrderAmount::from_json(cmd.amount.as_ref()).map_err(|e| {
            tracing::debug!(error = %e, "Rejected order request");
            e
        })?;

        tracing::debug!(
            amount = %amount.major_units(),
            minor_units = amount.minor_units(),
            currency = %amount.currency(),
            "Validated order amount"
        );

        // 2. Build gateway request
        let receipt = ReceiptToken::generate();
        let request = CreateOrderRequest {
            amount: amount.minor_units(),
            currency: amount.currency(),
            receipt: receipt.clone(),
        };

        // 3. Create order on the gateway
        let order = self.gateway.create_order(request).await.map_err(|e| {
            tracing::error!(
                error = %e,
                receipt = %receipt,
                amount = amount.minor_units(),
                "Failed to create gateway order"
            );
            PaymentError::from(e)
        })?;

        tracing::info!(
            order_id = %order.id,
            receipt = %receipt,
            amount = order.amount,
            currency = %order.currency,
            "Created gateway order"
        );

        Ok(CreateOrderResult { order, receipt })
    }
}
