use serde::{Deserialize, Serialize};

/// Raw quality-assessment form as posted by the upload page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityForm {
    #[serde(default, alias = "photoDataUri")]
    pub photo_image: Option<String>,
}

/// Quality assessment produced by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityResult {
    /// Conventionally 0.0 – 1.0. Not range-checked.
    pub quality_score: f64,
    /// Ordered as the model produced them.
    pub quality_factors: Vec<String>,
    pub suggested_price_range: String,
}
