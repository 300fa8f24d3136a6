//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the payment routes with the cross-cutting
//! tower layers: tracing, request timeout and CORS.

pub mod payment;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{CorsPolicy, ServerConfig};

// Re-export key types for convenience
pub use payment::payment_router;
pub use payment::PaymentAppState;

/// Build the complete application router.
pub fn build_router(state: PaymentAppState, server: &ServerConfig) -> Router {
    payment_router()
        .with_state(state)
        .layer(cors_layer(&server.cors_policy()))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    match policy {
        CorsPolicy::AllowList(origins) => {
            let origins: Vec<HeaderValue> = origins
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(_) => {
                        tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                        None
                    }
                })
                .collect();
            layer.allow_origin(AllowOrigin::list(origins))
        }
        CorsPolicy::AnyOrigin => layer.allow_origin(Any),
        CorsPolicy::SameOriginOnly => layer,
    }
}
