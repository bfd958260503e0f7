//! Carbon-savings calculator: CO2e avoided by burning briquettes instead of firewood or coal.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::form::FormNumber;

/// kg CO2e saved per kg of briquettes.
pub const CO2E_SAVED_PER_KG: f64 = 1.5;

pub const INVALID_WEIGHT_MESSAGE: &str = "Please enter a valid weight greater than zero.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarbonSavingsForm {
    pub weight: Option<FormNumber>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarbonSavings {
    pub weight_kg: f64,
    pub co2e_saved_kg: f64,
}

pub fn calculate_carbon_savings(form: &CarbonSavingsForm) -> Result<CarbonSavings, AppError> {
    let weight_kg = form
        .weight
        .as_ref()
        .and_then(FormNumber::as_finite)
        .filter(|w| *w > 0.0)
        .ok_or_else(|| AppError::Validation(INVALID_WEIGHT_MESSAGE.to_string()))?;

    Ok(CarbonSavings {
        weight_kg,
        co2e_saved_kg: weight_kg * CO2E_SAVED_PER_KG,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(weight: FormNumber) -> CarbonSavingsForm {
        CarbonSavingsForm {
            weight: Some(weight),
        }
    }

    #[test]
    fn test_ten_kg_saves_fifteen_kg() {
        let savings = calculate_carbon_savings(&form(10.0_f64.into())).unwrap();
        assert_eq!(
            savings,
            CarbonSavings {
                weight_kg: 10.0,
                co2e_saved_kg: 15.0
            }
        );
    }

    #[test]
    fn test_string_weight_is_accepted() {
        let savings = calculate_carbon_savings(&form("2.5".into())).unwrap();
        assert_eq!(savings.co2e_saved_kg, 3.75);
    }

    #[test]
    fn test_zero_weight_is_rejected() {
        assert!(matches!(
            calculate_carbon_savings(&form(0.0_f64.into())),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_negative_weight_is_rejected() {
        assert!(calculate_carbon_savings(&form((-4.0_f64).into())).is_err());
    }

    #[test]
    fn test_missing_or_text_weight_is_rejected() {
        assert!(calculate_carbon_savings(&CarbonSavingsForm::default()).is_err());
        assert!(calculate_carbon_savings(&form("heavy".into())).is_err());
    }
}
