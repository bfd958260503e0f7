// LLM prompt constants for the quality module.

pub const BRIQUETTE_QUALITY_PROMPT_NAME: &str = "briquette_quality";

pub const BRIQUETTE_QUALITY_SYSTEM: &str = "You are an expert in biomass briquette quality assessment. \
    You judge briquettes from photographs: shape, density, surface cracks, \
    carbonization evenness, visible contaminants and moisture. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences.";

/// Quality prompt template. Replace `{json_schema_instruction}` before sending.
/// The briquette photo travels as an image block alongside this text.
pub const BRIQUETTE_QUALITY_PROMPT_TEMPLATE: &str = r#"Analyze the attached photo of a biomass briquette and provide a quality score, the factors affecting its quality, and a suggested price range.

Return a JSON object with this EXACT schema:
{
  "qualityScore": 0.85,
  "qualityFactors": ["Uniform shape", "Minor surface cracks"],
  "suggestedPriceRange": "Rp 2,300 - Rp 2,500 per kg"
}

Rules:
- qualityScore is a number between 0 and 1 (1 = premium quality).
- qualityFactors lists short labels, most relevant first.
- suggestedPriceRange is a short human-readable range in Indonesian rupiah per kg.

{json_schema_instruction}"#;
