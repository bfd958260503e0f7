// E-Cowaste marketplace: static briquette catalog and the carbon-savings calculator.

pub mod carbon;
pub mod catalog;
pub mod handlers;
