// Business logic services

pub mod candidate_generation_service;
pub mod health_analysis_service;
pub mod nutrition_analysis_service;
pub mod personalization_service;
pub mod plan_generation_service;
pub mod plan_narrative_service;
pub mod weekly_schedule_service;
pub mod workout_recommendation_service;

pub use candidate_generation_service::CandidateGenerationService;
pub use health_analysis_service::HealthAnalysisService;
pub use nutrition_analysis_service::NutritionAnalysisService;
pub use personalization_service::PersonalizationService;
pub use plan_generation_service::{
    PlanGenerationRequest, PlanGenerationService, PlanIdProvider, SystemIdProvider,
};
pub use plan_narrative_service::{PlanNarrative, PlanNarrativeService};
pub use weekly_schedule_service::WeeklyScheduleService;
pub use workout_recommendation_service::{RecommendationRequest, WorkoutRecommendationService};
