//! Validation gate for the yield form.
//!
//! All-or-nothing: a form either becomes a complete `YieldRequest` or yields
//! exactly one `AppError::Validation`. No boundary call happens on failure.

use crate::errors::AppError;
use crate::forecast::models::{
    HistoricalYieldInput, ParametricYieldInput, YieldForm, YieldRequest, HARVEST_YEARS,
};
use crate::media::ImageDataUri;
use crate::models::form::FormNumber;

pub const MIXED_VARIANTS_MESSAGE: &str =
    "Invalid input: provide either soil parameters or historical harvest data, not both.";

pub fn validate_yield_form(form: &YieldForm) -> Result<YieldRequest, AppError> {
    let has_parametric =
        form.soil_ph.is_some() || form.nitrogen.is_some() || form.planting_density.is_some();
    let has_historical = form.land_area.is_some() || form.historical_harvest_data.is_some();

    match (has_parametric, has_historical) {
        (true, true) => Err(AppError::Validation(MIXED_VARIANTS_MESSAGE.to_string())),
        (_, true) => validate_historical(form).map(YieldRequest::Historical),
        _ => validate_parametric(form).map(YieldRequest::Parametric),
    }
}

fn validate_parametric(form: &YieldForm) -> Result<ParametricYieldInput, AppError> {
    Ok(ParametricYieldInput {
        soil_ph: require_number("soilPh", form.soil_ph.as_ref())?,
        nitrogen: require_number("nitrogen", form.nitrogen.as_ref())?,
        planting_density: require_number("plantingDensity", form.planting_density.as_ref())?,
        sorghum_variety: require_text("sorghumVariety", form.sorghum_variety.as_deref())?,
    })
}

fn validate_historical(form: &YieldForm) -> Result<HistoricalYieldInput, AppError> {
    let land_area = require_number("landArea", form.land_area.as_ref())?;
    let historical_harvest_data =
        complete_harvest_series(form.historical_harvest_data.as_deref().unwrap_or_default())?;
    let farming_technique = require_text("farmingTechnique", form.farming_technique.as_deref())?;
    let planting_distance = require_text("plantingDistance", form.planting_distance.as_deref())?;

    let satellite_image = match form.satellite_image.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(uri) => Some(
            ImageDataUri::parse(uri)
                .map_err(|e| AppError::Validation(e.user_message().to_string()))?,
        ),
    };

    Ok(HistoricalYieldInput {
        land_area,
        farming_technique,
        planting_distance,
        historical_harvest_data,
        satellite_image,
    })
}

/// Drops non-numeric entries; exactly `HARVEST_YEARS` must remain.
pub fn complete_harvest_series(entries: &[FormNumber]) -> Result<[f64; HARVEST_YEARS], AppError> {
    let values: Vec<f64> = entries.iter().filter_map(FormNumber::as_finite).collect();
    let found = values.len();
    values.try_into().map_err(|_| {
        AppError::Validation(format!(
            "Incomplete input: historicalHarvestData must contain exactly {HARVEST_YEARS} yearly yields (found {found})."
        ))
    })
}

fn require_number(field: &str, value: Option<&FormNumber>) -> Result<f64, AppError> {
    value
        .and_then(FormNumber::as_finite)
        .ok_or_else(|| AppError::Validation(format!("Invalid input: {field} must be a valid number.")))
}

fn require_text(field: &str, value: Option<&str>) -> Result<String, AppError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation(format!("Invalid input: {field} is required.")))
}
