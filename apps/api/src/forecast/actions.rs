//! Yield action: adapts the Sorcast form into the yield flow.

use tracing::{debug, error};

use crate::errors::{ActionResult, AppError};
use crate::forecast::flow::predict_sorghum_yield;
use crate::forecast::models::{YieldForm, YieldRequest, YieldResult};
use crate::forecast::prompts::{HISTORICAL_YIELD_PROMPT_NAME, PARAMETRIC_YIELD_PROMPT_NAME};
use crate::forecast::validation::validate_yield_form;
use crate::llm_client::PromptBoundary;

pub const YIELD_UNAVAILABLE_MESSAGE: &str =
    "Failed to predict yield. The AI model may be unavailable. Please try again later.";

pub async fn get_yield_prediction(
    boundary: &dyn PromptBoundary,
    form: YieldForm,
) -> ActionResult<YieldResult> {
    let request = match validate_yield_form(&form) {
        Ok(request) => request,
        Err(e) => {
            debug!("Yield form rejected: {e}");
            return ActionResult::Error(e);
        }
    };

    let prompt_name = match &request {
        YieldRequest::Parametric(_) => PARAMETRIC_YIELD_PROMPT_NAME,
        YieldRequest::Historical(_) => HISTORICAL_YIELD_PROMPT_NAME,
    };

    match predict_sorghum_yield(boundary, request).await {
        Ok(result) => ActionResult::Data(result),
        Err(source) => {
            error!(prompt = prompt_name, "Error predicting sorghum yield: {source}");
            ActionResult::Error(AppError::Boundary {
                message: YIELD_UNAVAILABLE_MESSAGE,
                source,
            })
        }
    }
}
