//! Axum route handler for the quality-assessment form.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderMap, StatusCode},
    Json,
};

use crate::errors::{ActionResult, AppError};
use crate::media::{IMAGE_TOO_LARGE_MESSAGE, INVALID_IMAGE_MESSAGE};
use crate::quality::actions::get_quality_analysis;
use crate::quality::models::{QualityForm, QualityResult};
use crate::state::AppState;

pub const FLOW: &str = "quality";

/// POST /api/v1/quality/assess
pub async fn handle_assess_quality(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<QualityForm>, JsonRejection>,
) -> ActionResult<QualityResult> {
    let _flight = match state.flights.acquire_form(FLOW, &headers) {
        Ok(guard) => guard,
        Err(e) => return ActionResult::Error(e),
    };

    let form = match payload {
        Ok(Json(form)) => form,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            return ActionResult::Error(AppError::Validation(IMAGE_TOO_LARGE_MESSAGE.to_string()));
        }
        Err(_) => {
            return ActionResult::Error(AppError::Validation(INVALID_IMAGE_MESSAGE.to_string()));
        }
    };

    get_quality_analysis(state.boundary.as_ref(), form).await
}
