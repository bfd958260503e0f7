use std::sync::Arc;

use crate::llm_client::PromptBoundary;
use crate::single_flight::SingleFlight;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Model boundary used by both flows. `LlmClient` in production.
    pub boundary: Arc<dyn PromptBoundary>,
    /// Per-form single-flight guards.
    pub flights: SingleFlight,
}

impl AppState {
    pub fn new(boundary: Arc<dyn PromptBoundary>) -> Self {
        Self {
            boundary,
            flights: SingleFlight::new(),
        }
    }
}
