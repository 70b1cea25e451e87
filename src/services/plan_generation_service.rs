use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::{validate_profile, UserProfile, WorkoutPlan, WorkoutRecommendation};
use crate::services::{PlanNarrativeService, WeeklyScheduleService};

/// Source of plan identity and creation time. Injectable so plan output
/// can be made fully reproducible in tests.
pub trait PlanIdProvider: Send + Sync {
    fn next_plan_id(&self) -> Uuid;
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Production provider: random v4 ids and the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdProvider;

impl PlanIdProvider for SystemIdProvider {
    fn next_plan_id(&self) -> Uuid {
        Uuid::new_v4()
    }

    fn timestamp(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Request for a multi-week plan over an already-personalized catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanGenerationRequest {
    pub profile: UserProfile,
    pub recommendations: Vec<WorkoutRecommendation>,
    /// Falls back to the configured default (4); clamped to at least 1.
    pub duration_weeks: Option<u32>,
    /// Falls back to the configured default (4).
    pub workout_days_per_week: Option<u8>,
}

/// Assembles weekly schedules, narrative content and progress targets into
/// a complete workout plan.
#[derive(Clone)]
pub struct PlanGenerationService {
    config: EngineConfig,
    schedule_service: WeeklyScheduleService,
    narrative_service: PlanNarrativeService,
    id_provider: Arc<dyn PlanIdProvider>,
}

impl fmt::Debug for PlanGenerationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlanGenerationService")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for PlanGenerationService {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanGenerationService {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            config,
            schedule_service: WeeklyScheduleService::new(),
            narrative_service: PlanNarrativeService::new(),
            id_provider: Arc::new(SystemIdProvider),
        }
    }

    /// Replaces the id/clock source, builder style.
    pub fn with_id_provider(mut self, provider: impl PlanIdProvider + 'static) -> Self {
        self.id_provider = Arc::new(provider);
        self
    }

    pub fn generate_plan(&self, request: &PlanGenerationRequest) -> Result<WorkoutPlan> {
        validate_profile(&request.profile)?;

        let duration_weeks = request
            .duration_weeks
            .unwrap_or(self.config.default_plan_duration_weeks)
            .max(1);
        let workout_days_per_week = request
            .workout_days_per_week
            .unwrap_or(self.config.default_workout_days_per_week);

        info!(
            user_id = %request.profile.id,
            duration_weeks,
            workout_days_per_week,
            "generating workout plan"
        );

        let workouts = self.schedule_service.schedule(
            &request.recommendations,
            duration_weeks,
            workout_days_per_week,
        );
        let narrative = self.narrative_service.build(&request.recommendations);
        let progress_tracking = self
            .narrative_service
            .progress_targets(&request.recommendations, &request.profile);

        Ok(WorkoutPlan {
            id: self.id_provider.next_plan_id(),
            name: narrative.name,
            description: narrative.description,
            duration_weeks,
            workouts,
            goals: narrative.goals,
            nutritional_guidelines: narrative.nutritional_guidelines,
            progress_tracking,
            created_at: self.id_provider.timestamp(),
        })
    }
}
