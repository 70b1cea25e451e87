use tracing::debug;

use crate::models::{HealthReport, HealthStatus, UserProfile};

const BMI_OVERWEIGHT: f64 = 25.0;
const BMI_UNDERWEIGHT: f64 = 18.5;
const HEART_RATE_ELEVATED: f64 = 80.0;
const SYSTOLIC_ELEVATED: f64 = 120.0;
const FLEXIBILITY_TARGET: f64 = 7.0;
const STRESS_HIGH: f64 = 7.0;
const FATIGUE_HIGH: f64 = 7.0;

/// Derives BMI, focus-area need flags, and a 1-10 fitness level from the
/// profile and the latest health report.
#[derive(Debug, Clone, Default)]
pub struct HealthAnalysisService;

impl HealthAnalysisService {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, profile: &UserProfile, report: &HealthReport) -> HealthStatus {
        let bmi = Self::body_mass_index(profile);

        let status = HealthStatus {
            bmi,
            weight_loss_needed: bmi > BMI_OVERWEIGHT,
            muscle_gain_needed: bmi < BMI_UNDERWEIGHT || profile.goal == "muscle_gain",
            endurance_needed: report.heart_rate_bpm > HEART_RATE_ELEVATED
                || report.blood_pressure_systolic > SYSTOLIC_ELEVATED,
            flexibility_needed: report.flexibility_score < FLEXIBILITY_TARGET,
            stress_relief_needed: report.stress_level > STRESS_HIGH,
            recovery_needed: report.fatigue_level > FATIGUE_HIGH,
            fitness_level: Self::derive_fitness_level(profile, report),
        };

        debug!(
            bmi = status.bmi,
            fitness_level = status.fitness_level,
            "derived health status"
        );

        status
    }

    fn body_mass_index(profile: &UserProfile) -> f64 {
        let height_m = profile.height_cm / 100.0;
        profile.weight_kg / (height_m * height_m)
    }

    fn derive_fitness_level(profile: &UserProfile, report: &HealthReport) -> u8 {
        let mut level: i32 = 5;

        if profile.age < 30 {
            level += 1;
        }
        if profile.age > 50 {
            level -= 1;
        }

        level += profile.activity_level.fitness_adjustment();

        if report.heart_rate_bpm < 70.0 {
            level += 1;
        }
        if report.blood_pressure_systolic < 120.0 {
            level += 1;
        }
        if report.flexibility_score > 7.0 {
            level += 1;
        }

        level.clamp(1, 10) as u8
    }
}
