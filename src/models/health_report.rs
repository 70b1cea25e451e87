use serde::{Deserialize, Serialize};

/// Point-in-time health snapshot supplied per invocation. Never persisted
/// by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub heart_rate_bpm: f64,
    pub blood_pressure_systolic: f64,
    /// 0-10 scale.
    pub flexibility_score: f64,
    /// 0-10 scale.
    pub stress_level: f64,
    /// 0-10 scale.
    pub fatigue_level: f64,
    pub sleep_quality: f64,
    pub energy_level: f64,
    pub mood: String,
    pub body_fat_percentage: Option<f64>,
    pub muscle_mass_kg: Option<f64>,
    pub notes: Option<String>,
}

/// Derived health classification that drives focus-area selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub bmi: f64,
    pub weight_loss_needed: bool,
    pub muscle_gain_needed: bool,
    pub endurance_needed: bool,
    pub flexibility_needed: bool,
    pub stress_relief_needed: bool,
    pub recovery_needed: bool,
    /// Derived level on a 1-10 scale, always within bounds.
    pub fitness_level: u8,
}
