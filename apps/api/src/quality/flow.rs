//! Briquette Quality Flow: renders the quality prompt and runs it on the boundary.

use crate::llm_client::prompts::{render_template, JSON_SCHEMA_INSTRUCTION};
use crate::llm_client::{run_typed, LlmError, Prompt, PromptBoundary};
use crate::media::ImageDataUri;
use crate::quality::models::QualityResult;
use crate::quality::prompts::{
    BRIQUETTE_QUALITY_PROMPT_NAME, BRIQUETTE_QUALITY_PROMPT_TEMPLATE, BRIQUETTE_QUALITY_SYSTEM,
};

pub fn build_quality_prompt(photo: ImageDataUri) -> Prompt {
    Prompt {
        name: BRIQUETTE_QUALITY_PROMPT_NAME,
        system: BRIQUETTE_QUALITY_SYSTEM,
        text: render_template(
            BRIQUETTE_QUALITY_PROMPT_TEMPLATE,
            &[("json_schema_instruction", JSON_SCHEMA_INSTRUCTION)],
        ),
        images: vec![photo],
    }
}

pub async fn analyze_briquette_quality(
    boundary: &dyn PromptBoundary,
    photo: ImageDataUri,
) -> Result<QualityResult, LlmError> {
    let prompt = build_quality_prompt(photo);
    run_typed(boundary, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::llm_client::stub::StubBoundary;
    use crate::media::png_data_uri;

    #[test]
    fn test_prompt_attaches_photo_and_fills_template() {
        let photo = ImageDataUri::parse(&png_data_uri()).unwrap();
        let prompt = build_quality_prompt(photo.clone());
        assert_eq!(prompt.images, vec![photo]);
        assert!(!prompt.text.contains("{json_schema_instruction}"));
        assert!(prompt.text.contains("qualityScore"));
    }

    #[tokio::test]
    async fn test_flow_returns_payload_unchanged() {
        let stub = StubBoundary::replying(json!({
            "qualityScore": 0.72,
            "qualityFactors": ["Even carbonization", "Slight crumbling at edges"],
            "suggestedPriceRange": "Rp 2,000 - Rp 2,300 per kg"
        }));
        let photo = ImageDataUri::parse(&png_data_uri()).unwrap();

        let result = analyze_briquette_quality(&stub, photo).await.unwrap();

        assert_eq!(result.quality_score, 0.72);
        assert_eq!(
            result.quality_factors,
            vec!["Even carbonization", "Slight crumbling at edges"]
        );
        assert_eq!(stub.call_count(), 1);
        assert_eq!(
            stub.last_prompt().unwrap().name,
            BRIQUETTE_QUALITY_PROMPT_NAME
        );
    }

    #[tokio::test]
    async fn test_flow_rejects_malformed_payload() {
        let stub = StubBoundary::replying(json!({"qualityScore": "high"}));
        let photo = ImageDataUri::parse(&png_data_uri()).unwrap();

        let err = analyze_briquette_quality(&stub, photo).await.unwrap_err();

        assert!(matches!(err, LlmError::Schema { .. }));
    }
}
