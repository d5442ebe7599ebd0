use serde::{Deserialize, Serialize};

/// Macronutrient figures for one food, in grams (kcal for calories).
///
/// Immutable once created; all values are finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub protein: f64,
    pub carbohydrates: f64,
    pub fats: f64,
    pub fiber: f64,
    pub calories: f64,
}

impl NutritionRecord {
    /// Basic validation: every field finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [
            self.protein,
            self.carbohydrates,
            self.fats,
            self.fiber,
            self.calories,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// The display-ready view model: locally generated nutrition figures plus
/// the AI-estimated GI fields, which are present only when estimation
/// succeeded.
///
/// Field names serialize in camelCase so persisted entries match the JSON
/// shape the original saved list used.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    pub id: String,
    pub name: String,
    pub nutrition: NutritionRecord,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gi_index: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gi_explanation: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// Canonical id for a food name: lowercase, whitespace runs collapsed to a
/// single hyphen. Two names that differ only in case or spacing share an id.
pub fn derive_id(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
