pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::forecast::handlers::handle_predict_yield;
use crate::guide::handle_get_guide;
use crate::marketplace::handlers::{handle_carbon_savings, handle_list_products};
use crate::quality::handlers::handle_assess_quality;
use crate::state::AppState;

/// Fits a 4 MiB image after base64 expansion plus the surrounding JSON.
pub const MAX_REQUEST_BODY_BYTES: usize = 8 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // AI flows
        .route("/api/v1/quality/assess", post(handle_assess_quality))
        .route("/api/v1/yield/predict", post(handle_predict_yield))
        // Static content
        .route("/api/v1/guide", get(handle_get_guide))
        .route("/api/v1/marketplace/products", get(handle_list_products))
        .route(
            "/api/v1/marketplace/carbon-savings",
            post(handle_carbon_savings),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .with_state(state)
}
