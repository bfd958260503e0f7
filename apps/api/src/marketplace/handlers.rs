//! Axum route handlers for the marketplace page.

use axum::{extract::rejection::JsonRejection, Json};

use crate::errors::{ActionResult, AppError};
use crate::marketplace::carbon::{
    calculate_carbon_savings, CarbonSavings, CarbonSavingsForm, INVALID_WEIGHT_MESSAGE,
};
use crate::marketplace::catalog::{Product, PRODUCTS};

/// GET /api/v1/marketplace/products
pub async fn handle_list_products() -> Json<&'static [Product]> {
    Json(PRODUCTS)
}

/// POST /api/v1/marketplace/carbon-savings
pub async fn handle_carbon_savings(
    payload: Result<Json<CarbonSavingsForm>, JsonRejection>,
) -> ActionResult<CarbonSavings> {
    match payload {
        Ok(Json(form)) => calculate_carbon_savings(&form).into(),
        Err(_) => ActionResult::Error(AppError::Validation(INVALID_WEIGHT_MESSAGE.to_string())),
    }
}
