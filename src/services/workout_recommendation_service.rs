use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::models::{
    validate_health_report, validate_profile, Equipment, HealthReport, NutritionItem,
    NutritionSummary, UserProfile, WorkoutRecommendation, WorkoutType,
};
use crate::services::{
    CandidateGenerationService, HealthAnalysisService, NutritionAnalysisService,
    PersonalizationService,
};

/// Request for a personalized workout catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    pub nutrition_items: Vec<NutritionItem>,
    pub health_report: HealthReport,
    pub available_equipment: Vec<Equipment>,
    pub preferred_types: Vec<WorkoutType>,
    /// Falls back to the configured default (60 minutes) when absent.
    pub available_time_minutes: Option<u32>,
    /// Not consumed here; carried so callers can forward one request
    /// object to plan generation.
    pub workout_days_per_week: Option<u8>,
}

/// Workout recommendation engine: health and nutrition analysis, candidate
/// generation, and personalization in one synchronous pipeline.
#[derive(Debug, Clone)]
pub struct WorkoutRecommendationService {
    config: EngineConfig,
    health_service: HealthAnalysisService,
    nutrition_service: NutritionAnalysisService,
    candidate_service: CandidateGenerationService,
    personalization_service: PersonalizationService,
}

impl Default for WorkoutRecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkoutRecommendationService {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            health_service: HealthAnalysisService::new(),
            nutrition_service: NutritionAnalysisService::new(),
            candidate_service: CandidateGenerationService::with_config(config.clone()),
            personalization_service: PersonalizationService::with_config(config.clone()),
            config,
        }
    }

    /// Produces the ranked, personalized workout catalog for one user.
    pub fn generate_recommendations(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Vec<WorkoutRecommendation>> {
        validate_profile(&request.profile)?;
        validate_health_report(&request.health_report)?;

        info!(user_id = %request.profile.id, "generating workout recommendations");

        let status = self
            .health_service
            .analyze(&request.profile, &request.health_report);

        // Informational only; surfaced to callers via analyze_nutrition.
        let nutrition = self.nutrition_service.summarize(&request.nutrition_items);
        debug!(
            balanced = nutrition.balanced,
            high_protein = nutrition.high_protein,
            "nutrition summary computed"
        );

        let available_time = request
            .available_time_minutes
            .unwrap_or(self.config.default_available_time_minutes);

        let candidates = self.candidate_service.generate(
            &request.profile,
            &status,
            &request.available_equipment,
            available_time,
        );

        let personalized = self.personalization_service.personalize(
            candidates,
            &request.preferred_types,
            &request.available_equipment,
            available_time,
        );

        info!(
            user_id = %request.profile.id,
            count = personalized.len(),
            "recommendation pipeline complete"
        );

        Ok(personalized)
    }

    /// Macro totals and flags for the supplied nutrition items.
    pub fn analyze_nutrition(&self, items: &[NutritionItem]) -> NutritionSummary {
        self.nutrition_service.summarize(items)
    }
}
