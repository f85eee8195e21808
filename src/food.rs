//! Food search data model
//!
//! Field names follow the food GraphQL schema (`food_name`, `serving_qty`, `nf_calories`, ...)
//! so provider payloads deserialize without an intermediate layer.

use serde::{Deserialize, Serialize};

/// A single autocomplete entry returned by a lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub name: String,
    #[serde(rename = "imageUrl", default)]
    pub image_url: String,
}

impl Suggestion {
    pub fn new(name: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image_url: image_url.into(),
        }
    }
}

/// Nutrition detail for one food, fetched when a suggestion is selected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodDetail {
    #[serde(rename = "food_name")]
    pub food_name: String,
    #[serde(rename = "serving_qty")]
    pub serving_quantity: f64,
    #[serde(rename = "serving_unit")]
    pub serving_unit: String,
    #[serde(rename = "nf_calories")]
    pub calories: f64,
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl FoodDetail {
    /// One-line serving summary, e.g. "1 large (72 kcal)"
    pub fn serving_summary(&self) -> String {
        format!(
            "{} {} ({} kcal)",
            format_quantity(self.serving_quantity),
            self.serving_unit,
            format_quantity(self.calories)
        )
    }
}

/// Format a number without a trailing ".0" for whole values
fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}
