use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub name: &'static str,
    /// Rupiah per `unit`.
    pub price_idr: u32,
    pub unit: &'static str,
    pub origin: &'static str,
    pub co2e_saved_per_kg: f64,
    pub image_url: &'static str,
}

const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400.png";

pub const PRODUCTS: &[Product] = &[
    Product {
        name: "Premium Sorghum Briquettes",
        price_idr: 2_500,
        unit: "kg",
        origin: "West Java",
        co2e_saved_per_kg: 1.6,
        image_url: PLACEHOLDER_IMAGE,
    },
    Product {
        name: "High-Density Biomass Blocks",
        price_idr: 2_200,
        unit: "kg",
        origin: "Central Java",
        co2e_saved_per_kg: 1.5,
        image_url: PLACEHOLDER_IMAGE,
    },
    Product {
        name: "Eco-Friendly Fuel Bricks",
        price_idr: 2_350,
        unit: "kg",
        origin: "East Java",
        co2e_saved_per_kg: 1.55,
        image_url: PLACEHOLDER_IMAGE,
    },
    Product {
        name: "Standard Sorghum Briquettes",
        price_idr: 2_000,
        unit: "kg",
        origin: "Banten",
        co2e_saved_per_kg: 1.4,
        image_url: PLACEHOLDER_IMAGE,
    },
];
