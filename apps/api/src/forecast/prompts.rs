// All LLM prompt constants for the forecast module.
// Reuses cross-cutting fragments from llm_client::prompts.

pub const PARAMETRIC_YIELD_PROMPT_NAME: &str = "sorghum_yield_parametric";
pub const HISTORICAL_YIELD_PROMPT_NAME: &str = "sorghum_yield_historical";

/// System prompt shared by both yield variants: enforces JSON-only output.
pub const SORGHUM_YIELD_SYSTEM: &str =
    "You are an expert agricultural AI specializing in sorghum yield prediction, named Sorcast. \
    Your goal is to predict yield and suggest biomass allocation for a circular briquette economy. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Result schema and allocation rules shared by both variants.
pub const YIELD_OUTPUT_INSTRUCTION: &str = r#"After predicting the total yield, classify the biomass into the following categories as percentages of the total yield:
- Grains (for food): 30%
- Stalks and Leaves (for briquettes): 50%
- Residual Biomass (for bioethanol/fertilizer): 20%
Adjust the split only when the inputs clearly justify it. The three percentages must sum to 100.

Return a JSON object with this EXACT schema:
{
  "predictedYield": 3.6,
  "historicalAverage": 3.4,
  "confidence": 0.8,
  "biomassAllocation": {
    "grains": 30,
    "stalksAndLeaves": 50,
    "residualBiomass": 20
  }
}

- predictedYield and historicalAverage are in tons per hectare.
- confidence is a number between 0 and 1."#;

/// Parametric yield prompt.
/// Replace: {soil_ph}, {nitrogen}, {planting_density}, {sorghum_variety},
///          {yield_output_instruction}, {json_schema_instruction}
pub const PARAMETRIC_YIELD_PROMPT_TEMPLATE: &str = r#"Based on the following soil and planting parameters, predict the sorghum yield in tons per hectare.
- Soil pH: {soil_ph}
- Soil Nitrogen (kg/ha): {nitrogen}
- Planting Density (plants/ha): {planting_density}
- Sorghum Variety: {sorghum_variety}

Also provide a 5-year historical average yield for these conditions and a confidence score for your prediction.

{yield_output_instruction}

{json_schema_instruction}"#;

/// Historical yield prompt.
/// Replace: {land_area}, {farming_technique}, {planting_distance},
///          {historical_harvest_data}, {satellite_image_line},
///          {yield_output_instruction}, {json_schema_instruction}
pub const HISTORICAL_YIELD_PROMPT_TEMPLATE: &str = r#"Based on the following parameters, predict the sorghum yield in tons per hectare.
- Land Area (ha): {land_area}
- Farming Technique: {farming_technique}
- Planting Distance: {planting_distance}
- Last 5 Years Harvest Data (t/ha): {historical_harvest_data}{satellite_image_line}

Also provide a 5-year historical average based on the provided data and a confidence score for your prediction.

{yield_output_instruction}

{json_schema_instruction}"#;

/// Inserted into the historical prompt when a field image is attached.
pub const SATELLITE_IMAGE_LINE: &str =
    "\n- Satellite Image: attached above. Use visible crop vigor and field coverage.";
