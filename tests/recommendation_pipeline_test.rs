use fitcoach_engine::models::{
    ActivityLevel, Equipment, HealthReport, Intensity, NutritionalFocus, UserProfile,
    WorkoutType,
};
use fitcoach_engine::services::HealthAnalysisService;
use fitcoach_engine::{RecommendationRequest, WorkoutRecommendationService};
use proptest::prelude::*;
use uuid::Uuid;

mod common;
use common::MockDataGenerator;

fn request(
    profile: UserProfile,
    report: HealthReport,
    equipment: Vec<Equipment>,
    preferred: Vec<WorkoutType>,
    time: Option<u32>,
) -> RecommendationRequest {
    RecommendationRequest {
        profile,
        nutrition_items: MockDataGenerator::nutrition_items(),
        health_report: report,
        available_equipment: equipment,
        preferred_types: preferred,
        available_time_minutes: time,
        workout_days_per_week: None,
    }
}

#[test]
fn overweight_stressed_user_gets_weight_loss_catalog_with_stress_overlay() {
    let service = WorkoutRecommendationService::new();
    let req = request(
        MockDataGenerator::overweight_profile(),
        MockDataGenerator::stressed_report(),
        vec![Equipment::Dumbbells, Equipment::YogaMat, Equipment::JumpRope],
        vec![WorkoutType::Hiit],
        Some(60),
    );

    let recommendations = service.generate_recommendations(&req).unwrap();

    assert!(!recommendations.is_empty());
    assert!(recommendations.iter().all(|r| matches!(
        r.nutritional_focus,
        NutritionalFocus::WeightLoss | NutritionalFocus::StressRelief
    )));
    assert!(recommendations
        .iter()
        .any(|r| r.nutritional_focus == NutritionalFocus::StressRelief));

    // Preferred HIIT ranks first and lands in the recommended prefix.
    assert_eq!(recommendations[0].workout_type, WorkoutType::Hiit);
    assert!(recommendations[0].is_recommended);
    assert!(recommendations[..3].iter().all(|r| r.is_recommended));
    assert!(recommendations[3..].iter().all(|r| !r.is_recommended));
}

#[test]
fn catalog_respects_time_and_equipment_constraints() {
    let service = WorkoutRecommendationService::new();
    let available = vec![Equipment::Dumbbells, Equipment::YogaMat];
    let req = request(
        MockDataGenerator::overweight_profile(),
        MockDataGenerator::stressed_report(),
        available.clone(),
        vec![],
        Some(40),
    );

    let recommendations = service.generate_recommendations(&req).unwrap();
    let effective = Equipment::effective_availability(&available);

    for r in &recommendations {
        assert!(r.duration_minutes <= 40, "{} is too long", r.name);
        assert!(
            r.equipment.iter().any(|e| effective.contains(e)),
            "{} needs unavailable equipment",
            r.name
        );
    }
}

#[test]
fn tight_time_budget_degrades_to_short_sessions_not_an_error() {
    let service = WorkoutRecommendationService::new();
    let req = request(
        MockDataGenerator::overweight_profile(),
        MockDataGenerator::stressed_report(),
        vec![],
        vec![],
        Some(25),
    );

    let recommendations = service.generate_recommendations(&req).unwrap();

    // Only the short bodyweight stress-relief session fits 25 minutes.
    assert!(recommendations.iter().all(|r| r.duration_minutes <= 25));
    assert!(!recommendations.is_empty());
}

#[test]
fn calorie_estimates_scale_with_body_weight() {
    let service = WorkoutRecommendationService::new();
    let req = request(
        MockDataGenerator::overweight_profile(),
        MockDataGenerator::stressed_report(),
        vec![Equipment::JumpRope],
        vec![],
        Some(60),
    );

    let recommendations = service.generate_recommendations(&req).unwrap();
    let hiit = recommendations
        .iter()
        .find(|r| r.workout_type == WorkoutType::Hiit)
        .unwrap();

    // 15 kcal/min * 30 min * (80 kg / 70 kg), truncated.
    assert_eq!(hiit.calories_burn, 514);
}

#[test]
fn muscle_gain_goal_tag_drives_the_catalog_for_normal_bmi() {
    let service = WorkoutRecommendationService::new();
    let mut profile = MockDataGenerator::profile();
    profile.goal = "muscle_gain".to_string();

    let req = request(
        profile,
        MockDataGenerator::health_report(),
        vec![Equipment::Dumbbells, Equipment::Barbell, Equipment::Bench],
        vec![WorkoutType::StrengthTraining],
        None,
    );

    let recommendations = service.generate_recommendations(&req).unwrap();

    assert!(recommendations
        .iter()
        .all(|r| r.nutritional_focus == NutritionalFocus::MuscleGain));
    assert_eq!(
        recommendations[0].workout_type,
        WorkoutType::StrengthTraining
    );
}

#[test]
fn healthy_user_falls_back_to_the_balanced_catalog() {
    let service = WorkoutRecommendationService::new();
    let req = request(
        MockDataGenerator::profile(),
        MockDataGenerator::health_report(),
        vec![Equipment::Dumbbells, Equipment::YogaMat, Equipment::Kettlebell],
        vec![],
        None,
    );

    let recommendations = service.generate_recommendations(&req).unwrap();

    assert!(!recommendations.is_empty());
    assert!(recommendations
        .iter()
        .all(|r| r.nutritional_focus == NutritionalFocus::Balance));
}

#[test]
fn nutrition_summary_is_informational_and_does_not_change_the_catalog() {
    let service = WorkoutRecommendationService::new();

    let mut req = request(
        MockDataGenerator::profile(),
        MockDataGenerator::health_report(),
        vec![Equipment::YogaMat],
        vec![],
        None,
    );
    let with_items = service.generate_recommendations(&req).unwrap();

    req.nutrition_items = vec![];
    let without_items = service.generate_recommendations(&req).unwrap();

    let names = |recs: &[fitcoach_engine::models::WorkoutRecommendation]| {
        recs.iter().map(|r| r.name.clone()).collect::<Vec<_>>()
    };
    assert_eq!(names(&with_items), names(&without_items));

    let summary = service.analyze_nutrition(&MockDataGenerator::nutrition_items());
    assert_eq!(summary.total_calories, 980.0);
    assert_eq!(summary.total_protein_g, 82.0);
}

#[test]
fn invalid_profiles_are_rejected_at_the_boundary() {
    let service = WorkoutRecommendationService::new();

    let mut profile = MockDataGenerator::profile();
    profile.height_cm = 0.0;
    let req = request(
        profile,
        MockDataGenerator::health_report(),
        vec![],
        vec![],
        None,
    );
    assert!(service.generate_recommendations(&req).is_err());

    let mut profile = MockDataGenerator::profile();
    profile.weight_kg = -4.0;
    let req = request(
        profile,
        MockDataGenerator::health_report(),
        vec![],
        vec![],
        None,
    );
    assert!(service.generate_recommendations(&req).is_err());
}

#[test]
fn recommendations_round_trip_through_json() {
    let service = WorkoutRecommendationService::new();
    let req = request(
        MockDataGenerator::overweight_profile(),
        MockDataGenerator::stressed_report(),
        vec![Equipment::Dumbbells, Equipment::YogaMat],
        vec![WorkoutType::Yoga],
        Some(60),
    );

    let recommendations = service.generate_recommendations(&req).unwrap();
    let json = serde_json::to_string(&recommendations).unwrap();
    let parsed: Vec<fitcoach_engine::models::WorkoutRecommendation> =
        serde_json::from_str(&json).unwrap();

    assert_eq!(recommendations, parsed);
}

proptest! {
    #[test]
    fn derived_fitness_level_stays_within_band(
        age in 1u32..=130,
        activity_idx in 0usize..5,
        heart_rate in 40.0f64..200.0,
        blood_pressure in 80.0f64..200.0,
        flexibility in 0.0f64..=10.0,
    ) {
        let levels = [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtremelyActive,
        ];

        let mut profile = MockDataGenerator::profile();
        profile.id = Uuid::new_v4();
        profile.age = age;
        profile.activity_level = levels[activity_idx];

        let mut report = MockDataGenerator::health_report();
        report.heart_rate_bpm = heart_rate;
        report.blood_pressure_systolic = blood_pressure;
        report.flexibility_score = flexibility;

        let status = HealthAnalysisService::new().analyze(&profile, &report);
        prop_assert!((1..=10).contains(&status.fitness_level));
    }
}
