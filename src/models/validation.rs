use thiserror::Error;

use crate::models::{HealthReport, UserProfile};

/// Input checks the profile-construction side is expected to enforce.
/// The facade services run them once at their public boundary; the inner
/// pipeline assumes valid inputs and never fails.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Profile name cannot be empty")]
    EmptyName,
    #[error("Height must be positive, got {0} cm")]
    InvalidHeight(f64),
    #[error("Weight must be positive, got {0} kg")]
    InvalidWeight(f64),
    #[error("Age must be between 1 and 130, got {0}")]
    InvalidAge(u32),
    #[error("Fitness level must be between 1 and 10, got {0}")]
    InvalidFitnessLevel(u8),
    #[error("{field} must be between 0 and 10, got {value}")]
    ScoreOutOfRange { field: &'static str, value: f64 },
    #[error("{field} must be positive, got {value}")]
    NonPositiveVital { field: &'static str, value: f64 },
}

pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if !profile.height_cm.is_finite() || profile.height_cm <= 0.0 {
        return Err(ValidationError::InvalidHeight(profile.height_cm));
    }

    if !profile.weight_kg.is_finite() || profile.weight_kg <= 0.0 {
        return Err(ValidationError::InvalidWeight(profile.weight_kg));
    }

    if profile.age == 0 || profile.age > 130 {
        return Err(ValidationError::InvalidAge(profile.age));
    }

    if profile.fitness_level < 1 || profile.fitness_level > 10 {
        return Err(ValidationError::InvalidFitnessLevel(profile.fitness_level));
    }

    Ok(())
}

pub fn validate_health_report(report: &HealthReport) -> Result<(), ValidationError> {
    for (field, value) in [
        ("heart_rate_bpm", report.heart_rate_bpm),
        ("blood_pressure_systolic", report.blood_pressure_systolic),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ValidationError::NonPositiveVital { field, value });
        }
    }

    for (field, value) in [
        ("flexibility_score", report.flexibility_score),
        ("stress_level", report.stress_level),
        ("fatigue_level", report.fatigue_level),
    ] {
        if !value.is_finite() || !(0.0..=10.0).contains(&value) {
            return Err(ValidationError::ScoreOutOfRange { field, value });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;
    use uuid::Uuid;

    fn profile() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            age: 32,
            gender: "female".to_string(),
            height_cm: 168.0,
            weight_kg: 62.0,
            goal: "general_fitness".to_string(),
            activity_level: ActivityLevel::ModeratelyActive,
            fitness_level: 5,
        }
    }

    fn report() -> HealthReport {
        HealthReport {
            heart_rate_bpm: 72.0,
            blood_pressure_systolic: 118.0,
            flexibility_score: 6.0,
            stress_level: 4.0,
            fatigue_level: 3.0,
            sleep_quality: 7.0,
            energy_level: 7.0,
            mood: "good".to_string(),
            body_fat_percentage: None,
            muscle_mass_kg: None,
            notes: None,
        }
    }

    #[test]
    fn accepts_well_formed_inputs() {
        assert_eq!(validate_profile(&profile()), Ok(()));
        assert_eq!(validate_health_report(&report()), Ok(()));
    }

    #[test]
    fn rejects_zero_height() {
        let mut p = profile();
        p.height_cm = 0.0;
        assert_eq!(validate_profile(&p), Err(ValidationError::InvalidHeight(0.0)));
    }

    #[test]
    fn rejects_out_of_band_fitness_level() {
        let mut p = profile();
        p.fitness_level = 11;
        assert_eq!(
            validate_profile(&p),
            Err(ValidationError::InvalidFitnessLevel(11))
        );

        p.fitness_level = 0;
        assert_eq!(
            validate_profile(&p),
            Err(ValidationError::InvalidFitnessLevel(0))
        );
    }

    #[test]
    fn rejects_out_of_range_scores() {
        let mut r = report();
        r.stress_level = 12.0;
        assert_eq!(
            validate_health_report(&r),
            Err(ValidationError::ScoreOutOfRange {
                field: "stress_level",
                value: 12.0
            })
        );
    }
}
