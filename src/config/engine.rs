use serde::{Deserialize, Serialize};

/// Caller-facing defaults for the recommendation and planning pipelines.
/// Medical thresholds (BMI bands, vital-sign cutoffs) are algorithm
/// constants and intentionally not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Time budget applied when the caller does not specify one.
    pub default_available_time_minutes: u32,
    pub default_workout_days_per_week: u8,
    pub default_plan_duration_weeks: u32,
    /// How many top-ranked candidates are flagged as recommended.
    pub recommended_prefix_len: usize,
    /// Body weight the per-intensity calorie rates are calibrated against.
    pub reference_weight_kg: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_available_time_minutes: 60,
            default_workout_days_per_week: 4,
            default_plan_duration_weeks: 4,
            recommended_prefix_len: 3,
            reference_weight_kg: 70.0,
        }
    }
}
