use std::collections::HashMap;

use crate::models::{
    NutritionalFocus, ProgressTracking, UserProfile, WorkoutRecommendation,
};

/// Fixed narrative content for one focus category.
struct FocusNarrative {
    name: &'static str,
    description: &'static str,
    goals: &'static [&'static str],
    nutritional_guidelines: &'static [&'static str],
}

static WEIGHT_LOSS_NARRATIVE: FocusNarrative = FocusNarrative {
    name: "Weight Loss Program",
    description: "A calorie-focused plan mixing high-intensity intervals, steady \
                  cardio and strength work to drop body fat while keeping muscle.",
    goals: &[
        "Create a consistent weekly calorie deficit through training",
        "Preserve lean muscle while losing weight",
        "Build cardio habits you can keep after the plan ends",
    ],
    nutritional_guidelines: &[
        "Hold a moderate calorie deficit of roughly 300-500 kcal per day",
        "Keep protein high to protect muscle, about 1.6 g per kg of body weight",
        "Favor whole foods and vegetables over processed snacks",
        "Drink water before meals and limit liquid calories",
    ],
};

static MUSCLE_GAIN_NARRATIVE: FocusNarrative = FocusNarrative {
    name: "Muscle Building Program",
    description: "A hypertrophy plan built around progressive strength sessions with \
                  supporting conditioning and mobility work.",
    goals: &[
        "Add lean muscle through progressive overload",
        "Increase strength on the main compound lifts",
        "Support growth with adequate food and sleep",
    ],
    nutritional_guidelines: &[
        "Eat a small calorie surplus of roughly 200-400 kcal per day",
        "Aim for 1.8-2.2 g of protein per kg of body weight",
        "Place a carbohydrate-rich meal within two hours of training",
        "Do not skip fats; keep them near 25-30% of intake",
    ],
};

static ENDURANCE_NARRATIVE: FocusNarrative = FocusNarrative {
    name: "Endurance Builder Program",
    description: "An aerobic development plan combining intervals, long steady \
                  sessions and supporting strength to improve heart and lung capacity.",
    goals: &[
        "Lower resting heart rate through aerobic adaptation",
        "Extend the duration you can sustain steady effort",
        "Strengthen the legs and trunk to hold form when tired",
    ],
    nutritional_guidelines: &[
        "Fuel longer sessions with carbohydrates beforehand",
        "Rehydrate with fluids and electrolytes after sweaty workouts",
        "Eat a mixed meal within an hour of finishing long sessions",
    ],
};

static FLEXIBILITY_NARRATIVE: FocusNarrative = FocusNarrative {
    name: "Mobility & Flexibility Program",
    description: "A range-of-motion plan pairing daily stretching flows with light \
                  strength so new flexibility stays stable and usable.",
    goals: &[
        "Improve measured flexibility in hips, hamstrings and shoulders",
        "Build control and balance through the new range",
        "Make mobility work a daily habit",
    ],
    nutritional_guidelines: &[
        "Stay well hydrated; connective tissue recovers poorly when dehydrated",
        "Keep protein adequate to support tissue remodeling",
        "Favor anti-inflammatory whole foods around intense stretching days",
    ],
};

static STRESS_RELIEF_NARRATIVE: FocusNarrative = FocusNarrative {
    name: "Stress Relief Program",
    description: "A low-pressure plan of restorative movement, breathing work and \
                  easy outdoor activity to bring stress levels down.",
    goals: &[
        "Lower day-to-day stress with regular gentle movement",
        "Improve sleep quality through evening wind-down sessions",
        "Keep every session enjoyable rather than demanding",
    ],
    nutritional_guidelines: &[
        "Limit caffeine after midday",
        "Keep regular meal times to stabilize energy",
        "Favor magnesium-rich foods such as leafy greens and nuts",
    ],
};

static DEFAULT_NARRATIVE: FocusNarrative = FocusNarrative {
    name: "Balanced Fitness Program",
    description: "A general plan balancing strength, cardio, mobility and recovery \
                  for overall health.",
    goals: &[
        "Train consistently across strength, cardio and mobility",
        "Build a sustainable weekly routine",
        "Improve overall energy and wellbeing",
    ],
    nutritional_guidelines: &[
        "Eat balanced meals with protein, complex carbs and vegetables",
        "Match portion sizes to your activity on the day",
        "Drink water regularly throughout the day",
    ],
};

fn narrative_for(focus: NutritionalFocus) -> &'static FocusNarrative {
    match focus {
        NutritionalFocus::WeightLoss => &WEIGHT_LOSS_NARRATIVE,
        NutritionalFocus::MuscleGain => &MUSCLE_GAIN_NARRATIVE,
        NutritionalFocus::Endurance => &ENDURANCE_NARRATIVE,
        NutritionalFocus::Flexibility => &FLEXIBILITY_NARRATIVE,
        NutritionalFocus::StressRelief => &STRESS_RELIEF_NARRATIVE,
        _ => &DEFAULT_NARRATIVE,
    }
}

/// Name, description, goal and guideline text for a plan.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanNarrative {
    pub name: String,
    pub description: String,
    pub goals: Vec<String>,
    pub nutritional_guidelines: Vec<String>,
}

/// Derives plan narrative and numeric progress targets from the focus of
/// the top-ranked candidate. An empty catalog gets the default narrative.
#[derive(Debug, Clone, Default)]
pub struct PlanNarrativeService;

impl PlanNarrativeService {
    pub fn new() -> Self {
        Self
    }

    pub fn build(&self, candidates: &[WorkoutRecommendation]) -> PlanNarrative {
        let narrative = narrative_for(Self::plan_focus(candidates));

        PlanNarrative {
            name: narrative.name.to_string(),
            description: narrative.description.to_string(),
            goals: narrative.goals.iter().map(|g| g.to_string()).collect(),
            nutritional_guidelines: narrative
                .nutritional_guidelines
                .iter()
                .map(|g| g.to_string())
                .collect(),
        }
    }

    pub fn progress_targets(
        &self,
        candidates: &[WorkoutRecommendation],
        profile: &UserProfile,
    ) -> ProgressTracking {
        let focus = Self::plan_focus(candidates);

        let weight_goal_kg = match focus {
            NutritionalFocus::WeightLoss => Some(profile.weight_kg * 0.95),
            NutritionalFocus::MuscleGain => Some(profile.weight_kg * 1.03),
            _ => None,
        };

        // Two target tiers, split at fitness level 5.
        let advanced = profile.fitness_level >= 5;

        let strength_goals = HashMap::from([
            ("push_ups".to_string(), if advanced { 30.0 } else { 20.0 }),
            (
                "bodyweight_squats".to_string(),
                if advanced { 50.0 } else { 30.0 },
            ),
            (
                "plank_hold_seconds".to_string(),
                if advanced { 120.0 } else { 60.0 },
            ),
        ]);

        let endurance_goals = HashMap::from([
            (
                "continuous_run_minutes".to_string(),
                if advanced { 40.0 } else { 20.0 },
            ),
            (
                "weekly_cardio_sessions".to_string(),
                if advanced { 4.0 } else { 3.0 },
            ),
        ]);

        let flexibility_goals = HashMap::from([
            (
                "sit_and_reach_cm".to_string(),
                if advanced { 10.0 } else { 5.0 },
            ),
            (
                "hamstring_stretch_hold_seconds".to_string(),
                if advanced { 60.0 } else { 30.0 },
            ),
        ]);

        ProgressTracking {
            weight_goal_kg,
            strength_goals,
            endurance_goals,
            flexibility_goals,
        }
    }

    fn plan_focus(candidates: &[WorkoutRecommendation]) -> NutritionalFocus {
        candidates
            .first()
            .map(|c| c.nutritional_focus)
            .unwrap_or(NutritionalFocus::Balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, Difficulty, Equipment, Intensity, MuscleGroup, WorkoutType,
    };
    use uuid::Uuid;

    fn profile(weight_kg: f64, fitness_level: u8) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            age: 30,
            gender: "male".to_string(),
            height_cm: 178.0,
            weight_kg,
            goal: "general_fitness".to_string(),
            activity_level: ActivityLevel::ModeratelyActive,
            fitness_level,
        }
    }

    fn candidate(focus: NutritionalFocus) -> WorkoutRecommendation {
        WorkoutRecommendation {
            id: Uuid::new_v4(),
            name: "candidate".to_string(),
            description: String::new(),
            workout_type: WorkoutType::Cardio,
            intensity: Intensity::Moderate,
            duration_minutes: 30,
            calories_burn: 200,
            muscle_groups: vec![MuscleGroup::FullBody],
            equipment: vec![Equipment::None],
            difficulty: Difficulty::Intermediate,
            nutritional_focus: focus,
            recommended_days: vec![],
            contraindications: vec![],
            instructions: vec![],
            reasoning: String::new(),
            is_recommended: false,
        }
    }

    #[test]
    fn narrative_follows_first_candidate_focus() {
        let service = PlanNarrativeService::new();

        let cands = vec![
            candidate(NutritionalFocus::WeightLoss),
            candidate(NutritionalFocus::MuscleGain),
        ];
        assert_eq!(service.build(&cands).name, "Weight Loss Program");

        let cands = vec![candidate(NutritionalFocus::Endurance)];
        assert_eq!(service.build(&cands).name, "Endurance Builder Program");
    }

    #[test]
    fn empty_catalog_gets_the_default_narrative() {
        let narrative = PlanNarrativeService::new().build(&[]);
        assert_eq!(narrative.name, "Balanced Fitness Program");
        assert!(!narrative.goals.is_empty());
        assert!(!narrative.nutritional_guidelines.is_empty());
    }

    #[test]
    fn weight_goal_scales_with_focus() {
        let service = PlanNarrativeService::new();
        let p = profile(80.0, 5);

        let loss = service.progress_targets(&[candidate(NutritionalFocus::WeightLoss)], &p);
        assert!((loss.weight_goal_kg.unwrap() - 76.0).abs() < 1e-9);

        let gain = service.progress_targets(&[candidate(NutritionalFocus::MuscleGain)], &p);
        assert!((gain.weight_goal_kg.unwrap() - 82.4).abs() < 1e-9);

        let other = service.progress_targets(&[candidate(NutritionalFocus::Balance)], &p);
        assert_eq!(other.weight_goal_kg, None);
    }

    #[test]
    fn targets_step_up_at_fitness_level_five() {
        let service = PlanNarrativeService::new();
        let cands = vec![candidate(NutritionalFocus::Balance)];

        let novice = service.progress_targets(&cands, &profile(70.0, 4));
        assert_eq!(novice.strength_goals["push_ups"], 20.0);
        assert_eq!(novice.endurance_goals["continuous_run_minutes"], 20.0);
        assert_eq!(novice.flexibility_goals["sit_and_reach_cm"], 5.0);

        let seasoned = service.progress_targets(&cands, &profile(70.0, 5));
        assert_eq!(seasoned.strength_goals["push_ups"], 30.0);
        assert_eq!(seasoned.endurance_goals["continuous_run_minutes"], 40.0);
        assert_eq!(seasoned.flexibility_goals["sit_and_reach_cm"], 10.0);
    }
}
