//! Quality action: the adapter between the upload form and the quality flow.
//!
//! Runs the image gate, calls the flow once and folds every failure into an
//! `ActionResult`. Nothing below this function reaches the caller as a fault.

use tracing::{debug, error};

use crate::errors::{ActionResult, AppError};
use crate::llm_client::PromptBoundary;
use crate::media::{ImageDataUri, INVALID_IMAGE_MESSAGE};
use crate::quality::flow::analyze_briquette_quality;
use crate::quality::models::{QualityForm, QualityResult};
use crate::quality::prompts::BRIQUETTE_QUALITY_PROMPT_NAME;

pub const QUALITY_UNAVAILABLE_MESSAGE: &str = "Failed to analyze briquette quality. \
    The AI model may be unavailable. Please try again later.";

/// Image gate for the quality form.
pub fn validate_quality_form(form: &QualityForm) -> Result<ImageDataUri, AppError> {
    let uri = form
        .photo_image
        .as_deref()
        .filter(|uri| !uri.is_empty())
        .ok_or_else(|| AppError::Validation(INVALID_IMAGE_MESSAGE.to_string()))?;

    ImageDataUri::parse(uri).map_err(|e| AppError::Validation(e.user_message().to_string()))
}

pub async fn get_quality_analysis(
    boundary: &dyn PromptBoundary,
    form: QualityForm,
) -> ActionResult<QualityResult> {
    let photo = match validate_quality_form(&form) {
        Ok(photo) => photo,
        Err(e) => {
            debug!("Quality form rejected: {e}");
            return ActionResult::Error(e);
        }
    };

    match analyze_briquette_quality(boundary, photo).await {
        Ok(result) => ActionResult::Data(result),
        Err(source) => {
            error!(
                prompt = BRIQUETTE_QUALITY_PROMPT_NAME,
                "Error analyzing briquette quality: {source}"
            );
            ActionResult::Error(AppError::Boundary {
                message: QUALITY_UNAVAILABLE_MESSAGE,
                source,
            })
        }
    }
}
