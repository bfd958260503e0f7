//! Axum route handler for the Sorcast yield form.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};

use crate::errors::{ActionResult, AppError};
use crate::forecast::actions::get_yield_prediction;
use crate::forecast::models::{YieldForm, YieldResult};
use crate::state::AppState;

pub const FLOW: &str = "yield";

/// POST /api/v1/yield/predict
pub async fn handle_predict_yield(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<YieldForm>, JsonRejection>,
) -> ActionResult<YieldResult> {
    let _flight = match state.flights.acquire_form(FLOW, &headers) {
        Ok(guard) => guard,
        Err(e) => return ActionResult::Error(e),
    };

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) => {
            return ActionResult::Error(AppError::Validation(format!(
                "Invalid input: {}",
                rejection.body_text()
            )));
        }
    };

    get_yield_prediction(state.boundary.as_ref(), form).await
}
