// Shared mock-data builders for integration tests

#![allow(dead_code)]

use fitcoach_engine::models::{ActivityLevel, HealthReport, NutritionItem, UserProfile};
use uuid::Uuid;

pub struct MockDataGenerator;

impl MockDataGenerator {
    /// Healthy mid-30s baseline profile.
    pub fn profile() -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Alex Example".to_string(),
            age: 35,
            gender: "female".to_string(),
            height_cm: 170.0,
            weight_kg: 65.0,
            goal: "general_fitness".to_string(),
            activity_level: ActivityLevel::ModeratelyActive,
            fitness_level: 5,
        }
    }

    /// 80 kg at 175 cm: BMI just past the weight-loss threshold.
    pub fn overweight_profile() -> UserProfile {
        UserProfile {
            weight_kg: 80.0,
            height_cm: 175.0,
            ..Self::profile()
        }
    }

    /// Unremarkable health report that raises no need flags.
    pub fn health_report() -> HealthReport {
        HealthReport {
            heart_rate_bpm: 72.0,
            blood_pressure_systolic: 115.0,
            flexibility_score: 7.5,
            stress_level: 4.0,
            fatigue_level: 3.0,
            sleep_quality: 7.0,
            energy_level: 7.0,
            mood: "good".to_string(),
            body_fat_percentage: Some(22.0),
            muscle_mass_kg: Some(48.0),
            notes: None,
        }
    }

    /// Elevated vitals, poor flexibility and high stress.
    pub fn stressed_report() -> HealthReport {
        HealthReport {
            heart_rate_bpm: 85.0,
            blood_pressure_systolic: 130.0,
            flexibility_score: 5.0,
            stress_level: 8.0,
            fatigue_level: 4.0,
            sleep_quality: 5.0,
            energy_level: 5.0,
            mood: "tense".to_string(),
            body_fat_percentage: None,
            muscle_mass_kg: None,
            notes: Some("reports trouble unwinding after work".to_string()),
        }
    }

    pub fn nutrition_items() -> Vec<NutritionItem> {
        vec![
            NutritionItem {
                name: "Oatmeal with berries".to_string(),
                calories: Some(350.0),
                protein_g: Some(12.0),
                carbs_g: Some(60.0),
                fat_g: Some(7.0),
            },
            NutritionItem {
                name: "Chicken salad".to_string(),
                calories: Some(450.0),
                protein_g: Some(40.0),
                carbs_g: Some(20.0),
                fat_g: Some(22.0),
            },
            NutritionItem {
                name: "Protein shake".to_string(),
                calories: Some(180.0),
                protein_g: Some(30.0),
                carbs_g: None,
                fat_g: Some(3.0),
            },
        ]
    }
}
