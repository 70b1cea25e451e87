use tracing::debug;

use crate::models::{NutritionItem, NutritionSummary};

const PROTEIN_HIGH_G: f64 = 100.0;
const CARBS_HIGH_G: f64 = 200.0;
const FAT_HIGH_G: f64 = 60.0;

// Reference macros for a balanced day, with the tolerance band around each.
const PROTEIN_REFERENCE_G: f64 = 80.0;
const PROTEIN_BAND_G: f64 = 30.0;
const CARBS_REFERENCE_G: f64 = 150.0;
const CARBS_BAND_G: f64 = 50.0;
const FAT_REFERENCE_G: f64 = 50.0;
const FAT_BAND_G: f64 = 20.0;

/// Aggregates recent nutrition items into macro totals and coarse flags.
/// The summary is informational: it is surfaced to callers but does not
/// steer focus-area selection.
#[derive(Debug, Clone, Default)]
pub struct NutritionAnalysisService;

impl NutritionAnalysisService {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, items: &[NutritionItem]) -> NutritionSummary {
        let total_calories: f64 = items.iter().map(|i| i.calories.unwrap_or(0.0)).sum();
        let total_protein_g: f64 = items.iter().map(|i| i.protein_g.unwrap_or(0.0)).sum();
        let total_carbs_g: f64 = items.iter().map(|i| i.carbs_g.unwrap_or(0.0)).sum();
        let total_fat_g: f64 = items.iter().map(|i| i.fat_g.unwrap_or(0.0)).sum();

        let balanced = (total_protein_g - PROTEIN_REFERENCE_G).abs() <= PROTEIN_BAND_G
            && (total_carbs_g - CARBS_REFERENCE_G).abs() <= CARBS_BAND_G
            && (total_fat_g - FAT_REFERENCE_G).abs() <= FAT_BAND_G;

        let summary = NutritionSummary {
            total_calories,
            total_protein_g,
            total_carbs_g,
            total_fat_g,
            high_protein: total_protein_g > PROTEIN_HIGH_G,
            high_carb: total_carbs_g > CARBS_HIGH_G,
            high_fat: total_fat_g > FAT_HIGH_G,
            balanced,
        };

        debug!(
            calories = summary.total_calories,
            protein = summary.total_protein_g,
            carbs = summary.total_carbs_g,
            fat = summary.total_fat_g,
            "summarized nutrition items"
        );

        summary
    }
}
