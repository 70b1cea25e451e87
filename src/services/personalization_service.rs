use tracing::debug;

use crate::config::EngineConfig;
use crate::models::{Equipment, WorkoutRecommendation, WorkoutType};

/// Filters the candidate catalog down to what the user can actually do,
/// ranks preferred workout types first, and flags the top of the list as
/// recommended.
#[derive(Debug, Clone)]
pub struct PersonalizationService {
    config: EngineConfig,
}

impl Default for PersonalizationService {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalizationService {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn personalize(
        &self,
        mut candidates: Vec<WorkoutRecommendation>,
        preferred_types: &[WorkoutType],
        available_equipment: &[Equipment],
        available_time_minutes: u32,
    ) -> Vec<WorkoutRecommendation> {
        let before = candidates.len();
        let effective_equipment = Equipment::effective_availability(available_equipment);

        candidates.retain(|c| {
            c.equipment
                .iter()
                .any(|e| effective_equipment.contains(e))
        });
        candidates.retain(|c| c.duration_minutes <= available_time_minutes);

        // Stable: preferred types float to the front, everything else keeps
        // its generation order.
        candidates.sort_by_key(|c| !preferred_types.contains(&c.workout_type));

        let top = candidates.len().min(self.config.recommended_prefix_len);
        for candidate in candidates.iter_mut().take(top) {
            candidate.is_recommended = true;
        }

        debug!(
            before,
            after = candidates.len(),
            recommended = top,
            "personalized candidate catalog"
        );

        candidates
    }
}
