use serde::{Deserialize, Serialize};

use crate::media::ImageDataUri;
use crate::models::form::FormNumber;

/// Number of yearly yields the historical variant requires.
pub const HARVEST_YEARS: usize = 5;

// ────────────────────────────────────────────────────────────────────────────
// Raw form
// ────────────────────────────────────────────────────────────────────────────

/// The yield form as posted. Carries the fields of both request variants;
/// the validation gate decides which one was submitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldForm {
    // Parametric variant
    pub soil_ph: Option<FormNumber>,
    pub nitrogen: Option<FormNumber>,
    pub planting_density: Option<FormNumber>,
    pub sorghum_variety: Option<String>,

    // Historical variant
    pub land_area: Option<FormNumber>,
    pub farming_technique: Option<String>,
    pub planting_distance: Option<String>,
    pub historical_harvest_data: Option<Vec<FormNumber>>,
    #[serde(default, alias = "satelliteImageUri")]
    pub satellite_image: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Validated requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ParametricYieldInput {
    pub soil_ph: f64,
    /// kg/ha
    pub nitrogen: f64,
    /// plants/ha
    pub planting_density: f64,
    /// Observed values: Numbu, Super-1, Kawali.
    pub sorghum_variety: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalYieldInput {
    /// Hectares.
    pub land_area: f64,
    pub farming_technique: String,
    pub planting_distance: String,
    /// t/ha, oldest year first.
    pub historical_harvest_data: [f64; HARVEST_YEARS],
    pub satellite_image: Option<ImageDataUri>,
}

/// A yield request that passed the validation gate.
#[derive(Debug, Clone, PartialEq)]
pub enum YieldRequest {
    Parametric(ParametricYieldInput),
    Historical(HistoricalYieldInput),
}

// ────────────────────────────────────────────────────────────────────────────
// Result
// ────────────────────────────────────────────────────────────────────────────

/// Percentages of total biomass. The prompt asks for a 100 total; not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BiomassAllocation {
    pub grains: f64,
    pub stalks_and_leaves: f64,
    pub residual_biomass: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YieldResult {
    /// t/ha
    pub predicted_yield: f64,
    /// t/ha
    pub historical_average: f64,
    /// 0.0 – 1.0
    pub confidence: f64,
    /// A missing or `null` allocation is `None` and is left out on output.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biomass_allocation: Option<BiomassAllocation>,
}
