//! SmartBriq production guide: the seven steps from sorghum waste to a finished briquette.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideStep {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub image_url: &'static str,
}

pub const PRODUCTION_STEPS: &[GuideStep] = &[
    GuideStep {
        id: "step-1",
        title: "1. Sorting Waste",
        content: "Separate sorghum waste (stalks, leaves) from other materials. Ensure the waste is clean and free from soil, rocks, or plastic contaminants for higher quality briquettes.",
        image_url: "https://i.ibb.co/VvZg3d2/sorghum-waste.jpg",
    },
    GuideStep {
        id: "step-2",
        title: "2. Drying",
        content: "Reduce the moisture content of the sorghum waste to below 12%. This can be done by sun-drying for several days or using a mechanical dryer. Proper drying is crucial for efficient combustion.",
        image_url: "https://i.ibb.co/YyLwGZc/drying-biomass.jpg",
    },
    GuideStep {
        id: "step-3",
        title: "3. Carbonization (Pyrolysis)",
        content: "Heat the dried biomass in a low-oxygen environment (a pyrolysis kiln). This process, called carbonization, converts the biomass into char, which burns cleaner and longer.",
        image_url: "https://i.ibb.co/qYn0M7s/pyrolysis-kiln.jpg",
    },
    GuideStep {
        id: "step-4",
        title: "4. Grinding",
        content: "Grind the resulting char into a fine, uniform powder. A smaller particle size allows for better compaction and a denser, more durable briquette.",
        image_url: "https://i.ibb.co/L51kL06/grinding-char.jpg",
    },
    GuideStep {
        id: "step-5",
        title: "5. Mixing with Binder",
        content: "Mix the char powder with a natural binder, such as starch or clay, at a ratio of about 10-20% binder to char. Add water to create a thick, consistent paste.",
        image_url: "https://i.ibb.co/z5wQzV8/mixing-briquette-paste.jpg",
    },
    GuideStep {
        id: "step-6",
        title: "6. Briquetting/Pressing",
        content: "Feed the mixture into a briquette press. The machine will compact the material under high pressure to form dense briquettes. Various shapes can be produced depending on the die.",
        image_url: "https://i.ibb.co/yQxY2Lg/briquette-press.jpg",
    },
    GuideStep {
        id: "step-7",
        title: "7. Final Drying",
        content: "Dry the freshly pressed briquettes to remove excess moisture from the binder. Sun-dry or use a low-temperature oven until they are hard and durable. They are now ready for use or sale.",
        image_url: "https://i.ibb.co/5M5Vz9b/biomass-briquettes.jpg",
    },
];

/// GET /api/v1/guide
pub async fn handle_get_guide() -> Json<&'static [GuideStep]> {
    Json(PRODUCTION_STEPS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_has_seven_ordered_steps() {
        assert_eq!(PRODUCTION_STEPS.len(), 7);
        for (i, step) in PRODUCTION_STEPS.iter().enumerate() {
            assert_eq!(step.id, format!("step-{}", i + 1));
            assert!(step.title.starts_with(&format!("{}. ", i + 1)));
        }
    }

    #[test]
    fn test_step_serializes_camel_case() {
        let value = serde_json::to_value(&PRODUCTION_STEPS[0]).unwrap();
        assert_eq!(value["title"], "1. Sorting Waste");
        assert!(value["imageUrl"].as_str().unwrap().ends_with(".jpg"));
    }
}
