// Sorcast: sorghum yield prediction and biomass allocation.
// Validation gate → prompt flow → discriminated action result.

pub mod actions;
pub mod flow;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validation;
