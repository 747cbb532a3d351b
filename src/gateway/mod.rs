//! HTTP gateway (Axum) for analysis and claim-review publishing.
//!
//! This module is primarily used by the `trustlens` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::{ErrorResponse, GatewayError};
pub use handler::{analyze_handler, claim_review_handler, health_handler};
pub use state::AppState;

/// Response header carrying a short status label (`ok`, `input_missing`, ...).
pub const TRUSTLENS_STATUS_HEADER: &str = "x-trustlens-status";

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/v1/analyze", post(analyze_handler))
        .route("/v1/claim-review", post(claim_review_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
