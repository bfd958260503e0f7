//! Sorghum Yield Flow: renders the variant's template and runs it on the boundary.

use crate::forecast::models::{HistoricalYieldInput, ParametricYieldInput, YieldRequest, YieldResult};
use crate::forecast::prompts::{
    HISTORICAL_YIELD_PROMPT_NAME, HISTORICAL_YIELD_PROMPT_TEMPLATE, PARAMETRIC_YIELD_PROMPT_NAME,
    PARAMETRIC_YIELD_PROMPT_TEMPLATE, SATELLITE_IMAGE_LINE, SORGHUM_YIELD_SYSTEM,
    YIELD_OUTPUT_INSTRUCTION,
};
use crate::llm_client::prompts::{render_template, JSON_SCHEMA_INSTRUCTION};
use crate::llm_client::{run_typed, LlmError, Prompt, PromptBoundary};

pub fn build_yield_prompt(request: YieldRequest) -> Prompt {
    match request {
        YieldRequest::Parametric(input) => parametric_prompt(&input),
        YieldRequest::Historical(input) => historical_prompt(input),
    }
}

fn parametric_prompt(input: &ParametricYieldInput) -> Prompt {
    let soil_ph = input.soil_ph.to_string();
    let nitrogen = input.nitrogen.to_string();
    let planting_density = input.planting_density.to_string();

    let text = render_template(
        PARAMETRIC_YIELD_PROMPT_TEMPLATE,
        &[
            ("yield_output_instruction", YIELD_OUTPUT_INSTRUCTION),
            ("json_schema_instruction", JSON_SCHEMA_INSTRUCTION),
            ("soil_ph", soil_ph.as_str()),
            ("nitrogen", nitrogen.as_str()),
            ("planting_density", planting_density.as_str()),
            ("sorghum_variety", input.sorghum_variety.as_str()),
        ],
    );

    Prompt {
        name: PARAMETRIC_YIELD_PROMPT_NAME,
        system: SORGHUM_YIELD_SYSTEM,
        text,
        images: Vec::new(),
    }
}

fn historical_prompt(input: HistoricalYieldInput) -> Prompt {
    let land_area = input.land_area.to_string();
    let harvest = input
        .historical_harvest_data
        .iter()
        .map(f64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let satellite_line = if input.satellite_image.is_some() {
        SATELLITE_IMAGE_LINE
    } else {
        ""
    };

    // One pass: user text is never rescanned for placeholders.
    let text = render_template(
        HISTORICAL_YIELD_PROMPT_TEMPLATE,
        &[
            ("yield_output_instruction", YIELD_OUTPUT_INSTRUCTION),
            ("json_schema_instruction", JSON_SCHEMA_INSTRUCTION),
            ("satellite_image_line", satellite_line),
            ("land_area", land_area.as_str()),
            ("farming_technique", input.farming_technique.as_str()),
            ("planting_distance", input.planting_distance.as_str()),
            ("historical_harvest_data", harvest.as_str()),
        ],
    );

    Prompt {
        name: HISTORICAL_YIELD_PROMPT_NAME,
        system: SORGHUM_YIELD_SYSTEM,
        text,
        images: input.satellite_image.into_iter().collect(),
    }
}

pub async fn predict_sorghum_yield(
    boundary: &dyn PromptBoundary,
    request: YieldRequest,
) -> Result<YieldResult, LlmError> {
    let prompt = build_yield_prompt(request);
    run_typed(boundary, &prompt).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::llm_client::stub::StubBoundary;
    use crate::media::{png_data_uri, ImageDataUri};

    fn parametric() -> YieldRequest {
        YieldRequest::Parametric(ParametricYieldInput {
            soil_ph: 6.5,
            nitrogen: 80.0,
            planting_density: 150000.0,
            sorghum_variety: "numbu".to_string(),
        })
    }

    fn historical(satellite_image: Option<ImageDataUri>) -> YieldRequest {
        YieldRequest::Historical(HistoricalYieldInput {
            land_area: 2.5,
            farming_technique: "conventional".to_string(),
            planting_distance: "75cm x 25cm".to_string(),
            historical_harvest_data: [2.8, 3.5, 3.2, 4.1, 3.8],
            satellite_image,
        })
    }

    fn assert_no_placeholders(text: &str) {
        for placeholder in [
            "{soil_ph}",
            "{nitrogen}",
            "{planting_density}",
            "{sorghum_variety}",
            "{land_area}",
            "{farming_technique}",
            "{planting_distance}",
            "{historical_harvest_data}",
            "{satellite_image_line}",
            "{yield_output_instruction}",
            "{json_schema_instruction}",
        ] {
            assert!(!text.contains(placeholder), "unreplaced {placeholder}");
        }
    }

    #[test]
    fn test_parametric_prompt_interpolates_fields() {
        let prompt = build_yield_prompt(parametric());
        assert_eq!(prompt.name, PARAMETRIC_YIELD_PROMPT_NAME);
        assert!(prompt.text.contains("- Soil pH: 6.5"));
        assert!(prompt.text.contains("- Soil Nitrogen (kg/ha): 80"));
        assert!(prompt.text.contains("- Planting Density (plants/ha): 150000"));
        assert!(prompt.text.contains("- Sorghum Variety: numbu"));
        assert!(prompt.images.is_empty());
        assert_no_placeholders(&prompt.text);
    }

    #[test]
    fn test_historical_prompt_lists_series_in_order() {
        let prompt = build_yield_prompt(historical(None));
        assert_eq!(prompt.name, HISTORICAL_YIELD_PROMPT_NAME);
        assert!(prompt
            .text
            .contains("- Last 5 Years Harvest Data (t/ha): 2.8, 3.5, 3.2, 4.1, 3.8"));
        assert!(!prompt.text.contains("Satellite Image"));
        assert!(prompt.images.is_empty());
        assert_no_placeholders(&prompt.text);
    }

    #[test]
    fn test_historical_prompt_attaches_satellite_image() {
        let image = ImageDataUri::parse(&png_data_uri()).unwrap();
        let prompt = build_yield_prompt(historical(Some(image.clone())));
        assert!(prompt.text.contains("Satellite Image"));
        assert_eq!(prompt.images, vec![image]);
    }

    #[test]
    fn test_user_text_with_braces_is_kept_verbatim() {
        let request = YieldRequest::Historical(HistoricalYieldInput {
            land_area: 1.0,
            farming_technique: "my {historical_harvest_data} method".to_string(),
            planting_distance: "{json_schema_instruction}".to_string(),
            historical_harvest_data: [1.0, 2.0, 3.0, 4.0, 5.0],
            satellite_image: None,
        });

        let prompt = build_yield_prompt(request);

        assert!(prompt
            .text
            .contains("- Farming Technique: my {historical_harvest_data} method"));
        assert!(prompt
            .text
            .contains("- Planting Distance: {json_schema_instruction}"));
        assert!(prompt
            .text
            .contains("- Last 5 Years Harvest Data (t/ha): 1, 2, 3, 4, 5"));
    }

    #[test]
    fn test_parametric_variety_with_braces_is_kept_verbatim() {
        let request = YieldRequest::Parametric(ParametricYieldInput {
            soil_ph: 6.5,
            nitrogen: 80.0,
            planting_density: 150000.0,
            sorghum_variety: "Numbu {yield_output_instruction}".to_string(),
        });

        let prompt = build_yield_prompt(request);

        assert!(prompt
            .text
            .contains("- Sorghum Variety: Numbu {yield_output_instruction}"));
    }

    #[test]
    fn test_average_wording_follows_variant() {
        let parametric = build_yield_prompt(parametric());
        assert!(parametric.text.contains("historical average yield for these conditions"));

        let historical = build_yield_prompt(historical(None));
        assert!(historical
            .text
            .contains("historical average based on the provided data"));
        assert!(!historical.text.contains("for these conditions"));
    }

    #[tokio::test]
    async fn test_flow_returns_payload_without_allocation() {
        let stub = StubBoundary::replying(json!({
            "predictedYield": 3.6,
            "historicalAverage": 3.4,
            "confidence": 0.8
        }));

        let result = predict_sorghum_yield(&stub, parametric()).await.unwrap();

        assert_eq!(result.predicted_yield, 3.6);
        assert_eq!(result.historical_average, 3.4);
        assert_eq!(result.confidence, 0.8);
        assert!(result.biomass_allocation.is_none());
        assert_eq!(stub.call_count(), 1);
    }

    #[tokio::test]
    async fn test_flow_rejects_payload_missing_confidence() {
        let stub = StubBoundary::replying(json!({
            "predictedYield": 3.6,
            "historicalAverage": 3.4
        }));

        let err = predict_sorghum_yield(&stub, historical(None))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            LlmError::Schema {
                prompt: HISTORICAL_YIELD_PROMPT_NAME,
                ..
            }
        ));
    }
}
