use serde::{Deserialize, Serialize};

/// Single aggregated meal entry. Missing macro values are treated as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionItem {
    pub name: String,
    pub calories: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbs_g: Option<f64>,
    pub fat_g: Option<f64>,
}

/// Macro totals and coarse flags over a list of nutrition items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub total_calories: f64,
    pub total_protein_g: f64,
    pub total_carbs_g: f64,
    pub total_fat_g: f64,
    pub high_protein: bool,
    pub high_carb: bool,
    pub high_fat: bool,
    pub balanced: bool,
}
