use std::sync::Arc;
use std::time::Duration;

use razorpay_checkout::adapters::http::{build_router, PaymentAppState};
use razorpay_checkout::adapters::razorpay::{RazorpayConfig, RazorpayGatewayAdapter};
use razorpay_checkout::config::AppConfig;
use razorpay_checkout::domain::payment::PaymentSignatureVerifier;
use razorpay_checkout::telemetry::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server);
    config.validate()?;

    let payment = &config.payment;
    let gateway = RazorpayGatewayAdapter::new(
        RazorpayConfig::new(&payment.razorpay_key_id, &payment.razorpay_key_secret)
            .with_base_url(&payment.api_base_url)
            .with_timeout(Duration::from_secs(payment.gateway_timeout_secs)),
    )?;
    let verifier = PaymentSignatureVerifier::new(&payment.razorpay_key_secret);

    let state = PaymentAppState::new(
        Arc::new(gateway),
        Arc::new(verifier),
        &payment.razorpay_key_id,
    );
    let app = build_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        live_mode = payment.is_live_mode(),
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM so in-flight requests can drain.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received SIGINT"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGINT handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig_term) => {
                sig_term.recv().await;
                tracing::info!("Received SIGTERM");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("Shutting down, draining in-flight requests");
}
