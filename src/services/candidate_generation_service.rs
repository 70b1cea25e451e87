use tracing::info;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::models::{
    DayOfWeek, Difficulty, Equipment, HealthStatus, Intensity, MuscleGroup, NutritionalFocus,
    UserProfile, WorkoutRecommendation, WorkoutType,
};

/// Static authoring input for one candidate workout. Everything except the
/// computed fields (calorie estimate, difficulty, equipment availability)
/// is fixed content.
struct CandidateTemplate {
    name: &'static str,
    description: &'static str,
    workout_type: WorkoutType,
    intensity: Intensity,
    duration_minutes: u32,
    muscle_groups: &'static [MuscleGroup],
    equipment: &'static [Equipment],
    nutritional_focus: NutritionalFocus,
    recommended_days: &'static [DayOfWeek],
    contraindications: &'static [&'static str],
    instructions: &'static [&'static str],
    reasoning: &'static str,
}

/// Primary-focus precedence. Evaluated top to bottom; the first satisfied
/// flag selects the candidate set, regardless of any later flags.
fn focus_precedence(status: &HealthStatus) -> [(bool, NutritionalFocus); 4] {
    [
        (status.weight_loss_needed, NutritionalFocus::WeightLoss),
        (status.muscle_gain_needed, NutritionalFocus::MuscleGain),
        (status.endurance_needed, NutritionalFocus::Endurance),
        (status.flexibility_needed, NutritionalFocus::Flexibility),
    ]
}

/// Produces the candidate catalog for the user's primary focus area, with
/// stress-relief and recovery sets appended as independent overlays.
#[derive(Debug, Clone)]
pub struct CandidateGenerationService {
    config: EngineConfig,
}

impl Default for CandidateGenerationService {
    fn default() -> Self {
        Self::new()
    }
}

impl CandidateGenerationService {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn generate(
        &self,
        profile: &UserProfile,
        status: &HealthStatus,
        available_equipment: &[Equipment],
        available_time_minutes: u32,
    ) -> Vec<WorkoutRecommendation> {
        let focus = Self::primary_focus(status);
        let effective_equipment = Equipment::effective_availability(available_equipment);

        let mut candidates = self.build_set(
            templates_for(focus),
            profile,
            status,
            &effective_equipment,
            available_time_minutes,
        );

        if status.stress_relief_needed {
            candidates.extend(self.build_set(
                STRESS_RELIEF_TEMPLATES,
                profile,
                status,
                &effective_equipment,
                available_time_minutes,
            ));
        }

        if status.recovery_needed {
            candidates.extend(self.build_set(
                RECOVERY_TEMPLATES,
                profile,
                status,
                &effective_equipment,
                available_time_minutes,
            ));
        }

        info!(
            focus = ?focus,
            count = candidates.len(),
            "generated candidate workouts"
        );

        candidates
    }

    fn primary_focus(status: &HealthStatus) -> NutritionalFocus {
        focus_precedence(status)
            .into_iter()
            .find_map(|(flag, focus)| flag.then_some(focus))
            .unwrap_or(NutritionalFocus::Balance)
    }

    fn build_set(
        &self,
        templates: &[CandidateTemplate],
        profile: &UserProfile,
        status: &HealthStatus,
        effective_equipment: &[Equipment],
        available_time_minutes: u32,
    ) -> Vec<WorkoutRecommendation> {
        templates
            .iter()
            .map(|t| {
                self.build_candidate(t, profile, status, effective_equipment, available_time_minutes)
            })
            .collect()
    }

    fn build_candidate(
        &self,
        template: &CandidateTemplate,
        profile: &UserProfile,
        status: &HealthStatus,
        effective_equipment: &[Equipment],
        available_time_minutes: u32,
    ) -> WorkoutRecommendation {
        let equipment: Vec<Equipment> = template
            .equipment
            .iter()
            .copied()
            .filter(|e| effective_equipment.contains(e))
            .collect();

        WorkoutRecommendation {
            id: Uuid::new_v4(),
            name: template.name.to_string(),
            description: template.description.to_string(),
            workout_type: template.workout_type,
            intensity: template.intensity,
            duration_minutes: template.duration_minutes,
            calories_burn: self.estimate_calories(
                template.intensity,
                template.duration_minutes,
                available_time_minutes,
                profile.weight_kg,
            ),
            muscle_groups: template.muscle_groups.to_vec(),
            equipment,
            difficulty: Difficulty::for_fitness_level(status.fitness_level),
            nutritional_focus: template.nutritional_focus,
            recommended_days: template.recommended_days.to_vec(),
            contraindications: template
                .contraindications
                .iter()
                .map(|s| s.to_string())
                .collect(),
            instructions: template.instructions.iter().map(|s| s.to_string()).collect(),
            reasoning: template.reasoning.to_string(),
            is_recommended: false,
        }
    }

    /// Calorie estimate scaled by body weight against the 70 kg reference;
    /// only the time the user can actually spend counts toward the burn.
    fn estimate_calories(
        &self,
        intensity: Intensity,
        duration_minutes: u32,
        available_time_minutes: u32,
        weight_kg: f64,
    ) -> u32 {
        let effective_minutes = duration_minutes.min(available_time_minutes);
        let burn = intensity.calories_per_minute()
            * f64::from(effective_minutes)
            * (weight_kg / self.config.reference_weight_kg);
        burn as u32
    }
}

fn templates_for(focus: NutritionalFocus) -> &'static [CandidateTemplate] {
    match focus {
        NutritionalFocus::WeightLoss => WEIGHT_LOSS_TEMPLATES,
        NutritionalFocus::MuscleGain => MUSCLE_GAIN_TEMPLATES,
        NutritionalFocus::Endurance => ENDURANCE_TEMPLATES,
        NutritionalFocus::Flexibility => FLEXIBILITY_TEMPLATES,
        NutritionalFocus::StressRelief => STRESS_RELIEF_TEMPLATES,
        NutritionalFocus::Recovery => RECOVERY_TEMPLATES,
        _ => BALANCED_TEMPLATES,
    }
}

const WEIGHT_LOSS_TEMPLATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "HIIT Fat Burner",
        description: "Alternating all-out work and short rests to maximize calorie burn \
                      and post-exercise oxygen consumption.",
        workout_type: WorkoutType::Hiit,
        intensity: Intensity::VeryHigh,
        duration_minutes: 30,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Core],
        equipment: &[Equipment::None, Equipment::JumpRope],
        nutritional_focus: NutritionalFocus::WeightLoss,
        recommended_days: &[DayOfWeek::Tuesday, DayOfWeek::Friday],
        contraindications: &["Uncontrolled high blood pressure", "Recent joint injury"],
        instructions: &[
            "Warm up with 5 minutes of light cardio and dynamic stretches",
            "Perform 40 seconds of burpees, squat jumps or jump rope at maximum effort",
            "Rest 20 seconds, then move to the next exercise",
            "Repeat the circuit for 8 rounds",
            "Cool down with 5 minutes of walking and static stretches",
        ],
        reasoning: "High-intensity intervals burn the most calories per minute and keep \
                    metabolism elevated after the session ends.",
    },
    CandidateTemplate {
        name: "Steady-State Cardio",
        description: "Continuous moderate cardio at a conversational pace to build an \
                      aerobic base while burning fat.",
        workout_type: WorkoutType::Cardio,
        intensity: Intensity::Moderate,
        duration_minutes: 45,
        muscle_groups: &[
            MuscleGroup::FullBody,
            MuscleGroup::Quadriceps,
            MuscleGroup::Calves,
        ],
        equipment: &[Equipment::None, Equipment::TreadmillOrOpenSpace],
        nutritional_focus: NutritionalFocus::WeightLoss,
        recommended_days: &[DayOfWeek::Tuesday, DayOfWeek::Friday],
        contraindications: &["Acute knee or ankle pain"],
        instructions: &[
            "Start with 5 minutes of easy walking",
            "Settle into a jog or brisk pace you can hold while speaking in full sentences",
            "Hold the pace for the main block",
            "Finish with 5 minutes of easy walking",
        ],
        reasoning: "Sustained moderate effort is easy to recover from, so it can be \
                    repeated often enough to create a consistent calorie deficit.",
    },
    CandidateTemplate {
        name: "Full-Body Burn Circuit",
        description: "Strength circuit with minimal rest that keeps the heart rate up \
                      while preserving lean muscle during weight loss.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::High,
        duration_minutes: 40,
        muscle_groups: &[
            MuscleGroup::FullBody,
            MuscleGroup::Quadriceps,
            MuscleGroup::Back,
            MuscleGroup::Core,
        ],
        equipment: &[Equipment::None, Equipment::Dumbbells],
        nutritional_focus: NutritionalFocus::WeightLoss,
        recommended_days: &[DayOfWeek::Monday, DayOfWeek::Thursday],
        contraindications: &["Lower-back injury"],
        instructions: &[
            "Warm up with bodyweight squats and arm circles",
            "Perform squats, push-ups, rows and lunges for 45 seconds each",
            "Rest 60 seconds after completing all four exercises",
            "Complete 4 rounds",
            "Stretch the worked muscles to finish",
        ],
        reasoning: "Keeping muscle mass while losing weight protects resting metabolic \
                    rate, and circuit format adds a cardio stimulus.",
    },
    CandidateTemplate {
        name: "Metabolic Strength Intervals",
        description: "Heavier compound lifts arranged in intervals for strength stimulus \
                      with elevated energy expenditure.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::High,
        duration_minutes: 35,
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Glutes,
            MuscleGroup::Shoulders,
            MuscleGroup::Core,
        ],
        equipment: &[Equipment::Dumbbells, Equipment::Kettlebell],
        nutritional_focus: NutritionalFocus::WeightLoss,
        recommended_days: &[DayOfWeek::Monday, DayOfWeek::Thursday],
        contraindications: &["Shoulder impingement", "Untreated hernia"],
        instructions: &[
            "Warm up thoroughly, including two light practice sets",
            "Perform goblet squats for 30 seconds, rest 30 seconds",
            "Perform kettlebell swings for 30 seconds, rest 30 seconds",
            "Perform overhead presses for 30 seconds, rest 30 seconds",
            "Repeat the sequence 5 times and cool down",
        ],
        reasoning: "Compound lifts under interval timing deliver a second weekly strength \
                    session without extending total training time.",
    },
    CandidateTemplate {
        name: "Power Yoga Flow",
        description: "Faster-paced vinyasa flow that builds mobility and core control \
                      while contributing to the weekly calorie total.",
        workout_type: WorkoutType::Yoga,
        intensity: Intensity::Moderate,
        duration_minutes: 30,
        muscle_groups: &[
            MuscleGroup::Core,
            MuscleGroup::Shoulders,
            MuscleGroup::Hamstrings,
        ],
        equipment: &[Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::WeightLoss,
        recommended_days: &[DayOfWeek::Wednesday, DayOfWeek::Saturday],
        contraindications: &["Wrist injury"],
        instructions: &[
            "Begin in mountain pose with steady breathing",
            "Flow through sun salutations for 10 minutes",
            "Hold warrior and plank variations for 5 breaths each",
            "Finish with seated forward folds and 3 minutes of rest",
        ],
        reasoning: "Mobility work between hard sessions reduces injury risk and keeps a \
                    training day active without adding joint load.",
    },
    CandidateTemplate {
        name: "Brisk Incline Walk",
        description: "Low-impact walking at an incline or brisk outdoor pace, useful on \
                      lighter days while still moving the calorie needle.",
        workout_type: WorkoutType::Walking,
        intensity: Intensity::Low,
        duration_minutes: 30,
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Calves,
            MuscleGroup::Glutes,
        ],
        equipment: &[Equipment::None, Equipment::TreadmillOrOpenSpace],
        nutritional_focus: NutritionalFocus::WeightLoss,
        recommended_days: &[DayOfWeek::Sunday],
        contraindications: &[],
        instructions: &[
            "Walk 5 minutes at an easy pace",
            "Increase to a brisk pace or set the treadmill to a 5-8% incline",
            "Hold the effort while keeping an upright posture",
            "Ease off for the final 5 minutes",
        ],
        reasoning: "An easy day still burns calories and supports recovery between \
                    higher-intensity sessions.",
    },
];

const MUSCLE_GAIN_TEMPLATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "Upper Body Builder",
        description: "Pressing and pulling work in the hypertrophy range for chest, back, \
                      shoulders and arms.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::High,
        duration_minutes: 50,
        muscle_groups: &[
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Arms,
        ],
        equipment: &[Equipment::Dumbbells, Equipment::Barbell, Equipment::Bench],
        nutritional_focus: NutritionalFocus::MuscleGain,
        recommended_days: &[DayOfWeek::Monday],
        contraindications: &["Rotator cuff injury"],
        instructions: &[
            "Warm up shoulders with band pull-aparts and light presses",
            "Bench press: 4 sets of 8-10 reps",
            "Bent-over rows: 4 sets of 8-10 reps",
            "Overhead press: 3 sets of 10 reps",
            "Curls and triceps extensions: 3 sets of 12 reps each",
        ],
        reasoning: "Dedicated upper-body volume in the 8-12 rep range is the most direct \
                    driver of muscle growth for the pressing and pulling chain.",
    },
    CandidateTemplate {
        name: "Lower Body Builder",
        description: "Squat and hinge patterns loaded for growth across quads, glutes and \
                      hamstrings.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::High,
        duration_minutes: 50,
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Glutes,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
        ],
        equipment: &[Equipment::Barbell, Equipment::Dumbbells],
        nutritional_focus: NutritionalFocus::MuscleGain,
        recommended_days: &[DayOfWeek::Thursday],
        contraindications: &["Lower-back injury", "Knee instability"],
        instructions: &[
            "Warm up with bodyweight squats and hip hinges",
            "Back squats: 4 sets of 8 reps",
            "Romanian deadlifts: 4 sets of 10 reps",
            "Walking lunges: 3 sets of 12 steps per leg",
            "Standing calf raises: 3 sets of 15 reps",
        ],
        reasoning: "The legs carry the largest muscles in the body; loading them weekly \
                    anchors total-body mass gain.",
    },
    CandidateTemplate {
        name: "Progressive Calisthenics",
        description: "Bodyweight progressions that add muscle with minimal equipment, \
                      scaled by leverage instead of load.",
        workout_type: WorkoutType::Bodyweight,
        intensity: Intensity::Moderate,
        duration_minutes: 40,
        muscle_groups: &[MuscleGroup::Chest, MuscleGroup::Back, MuscleGroup::Core],
        equipment: &[Equipment::None, Equipment::PullUpBar],
        nutritional_focus: NutritionalFocus::MuscleGain,
        recommended_days: &[DayOfWeek::Wednesday, DayOfWeek::Saturday],
        contraindications: &["Wrist injury"],
        instructions: &[
            "Warm up with scapular push-ups and hollow holds",
            "Push-up progression: 4 sets close to technical failure",
            "Pull-ups or inverted rows: 4 sets close to technical failure",
            "Pike push-ups: 3 sets of 8-12 reps",
            "Plank variations: 3 holds of 30-45 seconds",
        ],
        reasoning: "Leverage-based progressions keep building muscle on days when a \
                    loaded barbell is not available.",
    },
    CandidateTemplate {
        name: "Functional Hypertrophy Circuit",
        description: "Carries, swings and unilateral work to add muscle that transfers to \
                      everyday movement.",
        workout_type: WorkoutType::FunctionalTraining,
        intensity: Intensity::Moderate,
        duration_minutes: 40,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Core, MuscleGroup::Glutes],
        equipment: &[Equipment::Kettlebell, Equipment::Dumbbells, Equipment::None],
        nutritional_focus: NutritionalFocus::MuscleGain,
        recommended_days: &[DayOfWeek::Friday],
        contraindications: &["Grip injury"],
        instructions: &[
            "Warm up with light swings and suitcase carries",
            "Kettlebell swings: 4 sets of 15 reps",
            "Single-arm farmer carries: 4 lengths per side",
            "Split squats: 3 sets of 10 reps per leg",
            "Finish with loaded carries until grip fatigues",
        ],
        reasoning: "Unilateral and carry work fills the gap between pure lifting days and \
                    keeps trunk musculature growing.",
    },
    CandidateTemplate {
        name: "Conditioning Intervals",
        description: "Short cardio intervals that maintain work capacity without cutting \
                      into recovery for the lifting days.",
        workout_type: WorkoutType::Cardio,
        intensity: Intensity::Moderate,
        duration_minutes: 25,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Calves],
        equipment: &[Equipment::None, Equipment::StationaryBike],
        nutritional_focus: NutritionalFocus::MuscleGain,
        recommended_days: &[DayOfWeek::Tuesday],
        contraindications: &[],
        instructions: &[
            "Warm up 5 minutes at an easy spin or jog",
            "Ride or run 1 minute hard, 2 minutes easy",
            "Repeat 6 times",
            "Cool down 5 minutes",
        ],
        reasoning: "A small conditioning dose preserves aerobic capacity without the \
                    volume that would compete with hypertrophy recovery.",
    },
    CandidateTemplate {
        name: "Mobility & Recovery Stretch",
        description: "Targeted stretching and soft-tissue work so heavy sessions keep \
                      their range of motion.",
        workout_type: WorkoutType::Flexibility,
        intensity: Intensity::Low,
        duration_minutes: 25,
        muscle_groups: &[
            MuscleGroup::Hamstrings,
            MuscleGroup::Shoulders,
            MuscleGroup::LowerBack,
        ],
        equipment: &[Equipment::YogaMat, Equipment::FoamRoller],
        nutritional_focus: NutritionalFocus::MuscleGain,
        recommended_days: &[DayOfWeek::Sunday],
        contraindications: &[],
        instructions: &[
            "Foam roll quads, hamstrings and upper back for 5 minutes",
            "Hold hip flexor and hamstring stretches for 45 seconds per side",
            "Stretch chest and lats against a doorway or rack",
            "Finish with gentle spinal rotations",
        ],
        reasoning: "Maintaining range of motion lets the main lifts be loaded through a \
                    full, productive range.",
    },
];

const ENDURANCE_TEMPLATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "Interval Run",
        description: "Repeated hard running efforts with jog recoveries to raise aerobic \
                      power and heart efficiency.",
        workout_type: WorkoutType::Running,
        intensity: Intensity::High,
        duration_minutes: 40,
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
        ],
        equipment: &[Equipment::None, Equipment::TreadmillOrOpenSpace],
        nutritional_focus: NutritionalFocus::Endurance,
        recommended_days: &[DayOfWeek::Tuesday],
        contraindications: &["Uncontrolled high blood pressure", "Stress fracture history"],
        instructions: &[
            "Warm up with 10 minutes of easy jogging",
            "Run 3 minutes at a hard but controlled pace",
            "Jog easily for 2 minutes",
            "Repeat 5 times",
            "Cool down with 5 minutes of walking",
        ],
        reasoning: "Interval work stresses the cardiovascular system harder than steady \
                    running, driving down resting heart rate over time.",
    },
    CandidateTemplate {
        name: "Long Steady Ride",
        description: "Extended cycling at an even, sustainable effort to expand the \
                      aerobic base.",
        workout_type: WorkoutType::Cycling,
        intensity: Intensity::Moderate,
        duration_minutes: 60,
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
        ],
        equipment: &[Equipment::StationaryBike],
        nutritional_focus: NutritionalFocus::Endurance,
        recommended_days: &[DayOfWeek::Friday],
        contraindications: &["Acute knee pain"],
        instructions: &[
            "Spin easily for 10 minutes",
            "Settle into a steady effort where conversation is just possible",
            "Hold cadence around 85-95 rpm for the main block",
            "Spin down for the last 5 minutes",
        ],
        reasoning: "Long steady efforts grow stroke volume and fat-fueled capacity with \
                    low orthopedic cost.",
    },
    CandidateTemplate {
        name: "Endurance Swim",
        description: "Continuous swimming broken into manageable sets, building \
                      whole-body aerobic capacity with zero impact.",
        workout_type: WorkoutType::Swimming,
        intensity: Intensity::Moderate,
        duration_minutes: 45,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Back, MuscleGroup::Shoulders],
        equipment: &[Equipment::Pool],
        nutritional_focus: NutritionalFocus::Endurance,
        recommended_days: &[DayOfWeek::Wednesday],
        contraindications: &["Shoulder impingement"],
        instructions: &[
            "Swim 200m easy as a warm-up",
            "Swim 6 x 100m at a steady pace with 20 seconds rest",
            "Swim 4 x 50m slightly faster with 30 seconds rest",
            "Cool down with 100m easy backstroke",
        ],
        reasoning: "Swimming loads heart and lungs while unloading the joints, making it \
                    a sustainable second cardio modality.",
    },
    CandidateTemplate {
        name: "Leg & Core Stability",
        description: "Strength work for the muscles that hold posture late into long \
                      cardio sessions.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::Moderate,
        duration_minutes: 35,
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Core,
            MuscleGroup::Glutes,
            MuscleGroup::LowerBack,
        ],
        equipment: &[Equipment::None, Equipment::Dumbbells],
        nutritional_focus: NutritionalFocus::Endurance,
        recommended_days: &[DayOfWeek::Monday],
        contraindications: &["Lower-back injury"],
        instructions: &[
            "Warm up with glute bridges and bodyweight squats",
            "Goblet squats: 3 sets of 12 reps",
            "Single-leg deadlifts: 3 sets of 8 per side",
            "Side planks: 3 holds of 30 seconds per side",
            "Calf raises: 3 sets of 15 reps",
        ],
        reasoning: "Stronger legs and trunk delay form breakdown, which is where \
                    endurance injuries start.",
    },
    CandidateTemplate {
        name: "Runner's Yoga",
        description: "Slow yoga sequence aimed at hips, hamstrings and calves tightened \
                      by repetitive cardio.",
        workout_type: WorkoutType::Yoga,
        intensity: Intensity::Low,
        duration_minutes: 25,
        muscle_groups: &[
            MuscleGroup::Hamstrings,
            MuscleGroup::Calves,
            MuscleGroup::LowerBack,
        ],
        equipment: &[Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::Endurance,
        recommended_days: &[DayOfWeek::Saturday, DayOfWeek::Sunday],
        contraindications: &[],
        instructions: &[
            "Begin with downward dog, pedaling the feet",
            "Move through low lunge and half splits on each side",
            "Hold pigeon pose for 10 breaths per side",
            "Finish lying with legs up the wall for 3 minutes",
        ],
        reasoning: "Restoring hip and hamstring length keeps stride mechanics efficient \
                    as weekly mileage grows.",
    },
    CandidateTemplate {
        name: "Aerobic Cross-Training",
        description: "Mixed low-skill conditioning circuit as an alternative stimulus \
                      when running or riding again would be too repetitive.",
        workout_type: WorkoutType::FunctionalTraining,
        intensity: Intensity::Moderate,
        duration_minutes: 40,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Core],
        equipment: &[Equipment::None, Equipment::JumpRope],
        nutritional_focus: NutritionalFocus::Endurance,
        recommended_days: &[DayOfWeek::Thursday],
        contraindications: &["Recent ankle sprain"],
        instructions: &[
            "Warm up with easy rope skips and leg swings",
            "Rotate 2 minutes each of rope skipping, step-ups and mountain climbers",
            "Keep breathing steady; slow down rather than stopping",
            "Complete 4 rotations and cool down walking",
        ],
        reasoning: "Varying the movement pattern adds aerobic volume while spreading load \
                    across fresh tissues.",
    },
];

const FLEXIBILITY_TEMPLATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "Morning Mobility Flow",
        description: "Gentle full-body yoga flow that restores range of motion and starts \
                      the day without strain.",
        workout_type: WorkoutType::Yoga,
        intensity: Intensity::Low,
        duration_minutes: 30,
        muscle_groups: &[
            MuscleGroup::FullBody,
            MuscleGroup::Hamstrings,
            MuscleGroup::LowerBack,
        ],
        equipment: &[Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::Flexibility,
        recommended_days: &[DayOfWeek::Wednesday, DayOfWeek::Saturday],
        contraindications: &[],
        instructions: &[
            "Start with cat-cow movements for 2 minutes",
            "Flow slowly through sun salutations",
            "Hold triangle and wide-leg forward fold for 5 breaths each side",
            "Close with 3 minutes of relaxed breathing on the back",
        ],
        reasoning: "Daily gentle flows improve flexibility scores faster than occasional \
                    intense stretching sessions.",
    },
    CandidateTemplate {
        name: "Deep Stretch Session",
        description: "Long-hold static stretching with soft-tissue release for the \
                      tightest areas.",
        workout_type: WorkoutType::Flexibility,
        intensity: Intensity::Low,
        duration_minutes: 35,
        muscle_groups: &[
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Shoulders,
            MuscleGroup::LowerBack,
        ],
        equipment: &[Equipment::YogaMat, Equipment::FoamRoller],
        nutritional_focus: NutritionalFocus::Flexibility,
        recommended_days: &[DayOfWeek::Tuesday, DayOfWeek::Friday],
        contraindications: &["Acute muscle tear"],
        instructions: &[
            "Foam roll each major muscle group for 60 seconds",
            "Hold each static stretch for 60-90 seconds, breathing slowly",
            "Work through hamstrings, hips, chest and shoulders",
            "Never stretch into sharp pain",
        ],
        reasoning: "Long holds after soft-tissue release produce the largest lasting \
                    gains in measured flexibility.",
    },
    CandidateTemplate {
        name: "Pilates Core Foundations",
        description: "Controlled mat pilates focused on trunk strength through a full \
                      range of motion.",
        workout_type: WorkoutType::Pilates,
        intensity: Intensity::Moderate,
        duration_minutes: 40,
        muscle_groups: &[MuscleGroup::Core, MuscleGroup::Obliques, MuscleGroup::LowerBack],
        equipment: &[Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::Flexibility,
        recommended_days: &[DayOfWeek::Monday, DayOfWeek::Thursday],
        contraindications: &["Recent abdominal surgery"],
        instructions: &[
            "Begin with breathing drills and pelvic tilts",
            "Perform the hundred, single-leg stretches and leg circles",
            "Move through spine stretch and saw with control",
            "Finish with child's pose",
        ],
        reasoning: "Strength through range, not passive stretching alone, is what makes \
                    new flexibility usable.",
    },
    CandidateTemplate {
        name: "Balance & Control",
        description: "Single-leg and stability work that trains the nervous system to own \
                      newly gained range.",
        workout_type: WorkoutType::Balance,
        intensity: Intensity::Low,
        duration_minutes: 25,
        muscle_groups: &[MuscleGroup::Core, MuscleGroup::Calves, MuscleGroup::Glutes],
        equipment: &[Equipment::None, Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::Flexibility,
        recommended_days: &[DayOfWeek::Sunday],
        contraindications: &["Vertigo"],
        instructions: &[
            "Stand on one leg for 30 seconds per side, eyes open",
            "Repeat with eyes closed for 15 seconds per side",
            "Perform slow single-leg reaches in three directions",
            "Hold tree pose for 5 breaths per side",
        ],
        reasoning: "Balance drills convert flexibility into stable, injury-resistant \
                    movement.",
    },
    CandidateTemplate {
        name: "Gentle Strength Support",
        description: "Light resistance-band strength work to support joints while the \
                      flexibility program progresses.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::Low,
        duration_minutes: 30,
        muscle_groups: &[MuscleGroup::Back, MuscleGroup::Shoulders, MuscleGroup::Glutes],
        equipment: &[Equipment::ResistanceBands, Equipment::None],
        nutritional_focus: NutritionalFocus::Flexibility,
        recommended_days: &[DayOfWeek::Monday, DayOfWeek::Thursday],
        contraindications: &[],
        instructions: &[
            "Band pull-aparts: 3 sets of 15 reps",
            "Band rows: 3 sets of 12 reps",
            "Band glute bridges: 3 sets of 15 reps",
            "Bodyweight squats to a comfortable depth: 2 sets of 10",
        ],
        reasoning: "A little strength work around newly mobile joints keeps them stable \
                    as range increases.",
    },
];

const BALANCED_TEMPLATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "Total-Body Strength",
        description: "Compound movements covering push, pull, squat and hinge in one \
                      session.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::Moderate,
        duration_minutes: 45,
        muscle_groups: &[
            MuscleGroup::FullBody,
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Quadriceps,
        ],
        equipment: &[Equipment::Dumbbells, Equipment::None],
        nutritional_focus: NutritionalFocus::Balance,
        recommended_days: &[DayOfWeek::Monday],
        contraindications: &["Lower-back injury"],
        instructions: &[
            "Warm up with 5 minutes of dynamic movement",
            "Squats: 3 sets of 10 reps",
            "Push-ups or dumbbell presses: 3 sets of 10 reps",
            "Rows: 3 sets of 10 reps",
            "Hip hinges: 3 sets of 10 reps",
        ],
        reasoning: "One full-body strength session per week maintains muscle and bone \
                    health for a generally healthy user.",
    },
    CandidateTemplate {
        name: "Cardio Mix",
        description: "Varied moderate cardio blocks to keep heart health without \
                      monotony.",
        workout_type: WorkoutType::Cardio,
        intensity: Intensity::Moderate,
        duration_minutes: 35,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Calves],
        equipment: &[Equipment::None, Equipment::JumpRope],
        nutritional_focus: NutritionalFocus::Balance,
        recommended_days: &[DayOfWeek::Tuesday, DayOfWeek::Friday],
        contraindications: &[],
        instructions: &[
            "Warm up walking for 5 minutes",
            "Alternate 5 minutes of brisk cardio with 2 minutes easy",
            "Choose jogging, rope skipping or fast walking per block",
            "Cool down for 5 minutes",
        ],
        reasoning: "Mixed modalities hit the weekly cardio dose while spreading impact \
                    across different tissues.",
    },
    CandidateTemplate {
        name: "Everyday Yoga",
        description: "Accessible yoga session balancing mobility, breathing and light \
                      strength.",
        workout_type: WorkoutType::Yoga,
        intensity: Intensity::Low,
        duration_minutes: 30,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Core, MuscleGroup::Hamstrings],
        equipment: &[Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::Balance,
        recommended_days: &[DayOfWeek::Wednesday, DayOfWeek::Saturday],
        contraindications: &[],
        instructions: &[
            "Begin seated with 2 minutes of slow breathing",
            "Move through cat-cow, downward dog and low lunges",
            "Hold warrior two and triangle for 5 breaths per side",
            "Finish with a short supported rest",
        ],
        reasoning: "Regular yoga covers the mobility and stress-regulation needs a \
                    balanced program would otherwise miss.",
    },
    CandidateTemplate {
        name: "Functional Fitness Circuit",
        description: "Everyday movement patterns (carry, squat, push, pull) trained as a \
                      circuit.",
        workout_type: WorkoutType::FunctionalTraining,
        intensity: Intensity::Moderate,
        duration_minutes: 40,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::Core, MuscleGroup::Glutes],
        equipment: &[Equipment::Kettlebell, Equipment::None],
        nutritional_focus: NutritionalFocus::Balance,
        recommended_days: &[DayOfWeek::Thursday],
        contraindications: &["Grip injury"],
        instructions: &[
            "Warm up with light carries and squats",
            "Rotate 40 seconds each: goblet squats, carries, push-ups, swings",
            "Rest 90 seconds between rounds",
            "Complete 4 rounds",
        ],
        reasoning: "Training the patterns used in daily life keeps general-purpose \
                    fitness honest.",
    },
    CandidateTemplate {
        name: "Core & Posture Strength",
        description: "Short trunk-focused session countering long sitting hours.",
        workout_type: WorkoutType::StrengthTraining,
        intensity: Intensity::Moderate,
        duration_minutes: 30,
        muscle_groups: &[
            MuscleGroup::Core,
            MuscleGroup::Obliques,
            MuscleGroup::LowerBack,
            MuscleGroup::Shoulders,
        ],
        equipment: &[Equipment::None, Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::Balance,
        recommended_days: &[DayOfWeek::Thursday],
        contraindications: &[],
        instructions: &[
            "Plank: 3 holds of 30-45 seconds",
            "Side planks: 2 holds of 30 seconds per side",
            "Bird-dogs: 3 sets of 10 per side",
            "Reverse snow angels: 2 sets of 12",
        ],
        reasoning: "A strong trunk and upper back protect the spine and improve posture \
                    with a small weekly time cost.",
    },
    CandidateTemplate {
        name: "Weekend Walk",
        description: "Unhurried long walk for active recovery and daily-movement volume.",
        workout_type: WorkoutType::Walking,
        intensity: Intensity::Low,
        duration_minutes: 40,
        muscle_groups: &[MuscleGroup::Quadriceps, MuscleGroup::Calves],
        equipment: &[Equipment::None],
        nutritional_focus: NutritionalFocus::Balance,
        recommended_days: &[DayOfWeek::Sunday],
        contraindications: &[],
        instructions: &[
            "Walk at a comfortable pace, outdoors if possible",
            "Keep shoulders relaxed and stride natural",
            "Optionally add two or three short brisk segments",
        ],
        reasoning: "Easy walking adds weekly activity with essentially no recovery cost.",
    },
];

const STRESS_RELIEF_TEMPLATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "Restorative Yoga",
        description: "Supported, long-held poses with slow breathing to down-regulate the \
                      nervous system.",
        workout_type: WorkoutType::Yoga,
        intensity: Intensity::Low,
        duration_minutes: 30,
        muscle_groups: &[MuscleGroup::FullBody, MuscleGroup::LowerBack],
        equipment: &[Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::StressRelief,
        recommended_days: &[DayOfWeek::Wednesday, DayOfWeek::Sunday],
        contraindications: &[],
        instructions: &[
            "Set up in a quiet space with supports under knees and head",
            "Hold child's pose, supported twist and legs-up-the-wall for 5 minutes each",
            "Breathe in for 4 counts, out for 6 throughout",
            "Finish lying still for 5 minutes",
        ],
        reasoning: "Long supported holds with extended exhales reliably lower reported \
                    stress and resting heart rate.",
    },
    CandidateTemplate {
        name: "Breath & Mobility Reset",
        description: "Short mid-week circuit of breathing drills and easy mobility to \
                      interrupt accumulating tension.",
        workout_type: WorkoutType::Flexibility,
        intensity: Intensity::Low,
        duration_minutes: 20,
        muscle_groups: &[MuscleGroup::Shoulders, MuscleGroup::LowerBack],
        equipment: &[Equipment::None, Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::StressRelief,
        recommended_days: &[DayOfWeek::Tuesday, DayOfWeek::Thursday],
        contraindications: &[],
        instructions: &[
            "Box breathing: 4 counts in, hold, out, hold, for 3 minutes",
            "Neck and shoulder rolls, 10 slow reps each direction",
            "Standing side bends and gentle spinal twists",
            "Close with 2 minutes of relaxed breathing",
        ],
        reasoning: "Brief frequent resets control stress better than one long weekly \
                    session.",
    },
    CandidateTemplate {
        name: "Mindful Walk",
        description: "Unplugged outdoor walk at an easy pace, attention on surroundings \
                      and breath.",
        workout_type: WorkoutType::Walking,
        intensity: Intensity::Low,
        duration_minutes: 30,
        muscle_groups: &[MuscleGroup::Quadriceps, MuscleGroup::Calves],
        equipment: &[Equipment::None],
        nutritional_focus: NutritionalFocus::StressRelief,
        recommended_days: &[DayOfWeek::Saturday],
        contraindications: &[],
        instructions: &[
            "Leave headphones behind and walk somewhere green if possible",
            "Keep a pace where breathing stays silent",
            "Note five things you can see, hear and feel",
            "Let the shoulders drop on every exhale",
        ],
        reasoning: "Light movement outdoors combines two of the best-evidenced \
                    non-clinical stress reducers.",
    },
];

const RECOVERY_TEMPLATES: &[CandidateTemplate] = &[
    CandidateTemplate {
        name: "Active Recovery Spin",
        description: "Very easy cycling to move blood through fatigued legs without \
                      adding training stress.",
        workout_type: WorkoutType::Cycling,
        intensity: Intensity::Low,
        duration_minutes: 25,
        muscle_groups: &[MuscleGroup::Quadriceps, MuscleGroup::Hamstrings],
        equipment: &[Equipment::StationaryBike],
        nutritional_focus: NutritionalFocus::Recovery,
        recommended_days: &[DayOfWeek::Sunday],
        contraindications: &[],
        instructions: &[
            "Spin with almost no resistance at a comfortable cadence",
            "Keep heart rate low enough to breathe through the nose",
            "Stop while it still feels easy",
        ],
        reasoning: "Gentle circulation work clears fatigue faster than complete rest.",
    },
    CandidateTemplate {
        name: "Foam Rolling & Mobility",
        description: "Soft-tissue release and easy range-of-motion work for sore muscle \
                      groups.",
        workout_type: WorkoutType::Flexibility,
        intensity: Intensity::Low,
        duration_minutes: 20,
        muscle_groups: &[
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Back,
        ],
        equipment: &[Equipment::FoamRoller, Equipment::YogaMat],
        nutritional_focus: NutritionalFocus::Recovery,
        recommended_days: &[DayOfWeek::Wednesday, DayOfWeek::Saturday],
        contraindications: &["Acute muscle tear"],
        instructions: &[
            "Roll each sore area slowly for 60-90 seconds",
            "Pause on tender spots and breathe until they ease",
            "Follow with gentle stretches for the same areas",
        ],
        reasoning: "Targeted soft-tissue work reduces perceived soreness and restores \
                    range before the next hard session.",
    },
    CandidateTemplate {
        name: "Easy Swim",
        description: "Relaxed swimming or water walking, letting buoyancy unload tired \
                      joints.",
        workout_type: WorkoutType::Swimming,
        intensity: Intensity::Low,
        duration_minutes: 25,
        muscle_groups: &[MuscleGroup::FullBody],
        equipment: &[Equipment::Pool],
        nutritional_focus: NutritionalFocus::Recovery,
        recommended_days: &[DayOfWeek::Sunday],
        contraindications: &[],
        instructions: &[
            "Swim easy lengths with long strokes, resting whenever needed",
            "Mix in backstroke or water walking to stay relaxed",
            "Exit the water while still feeling fresh",
        ],
        reasoning: "Water immersion plus light movement is among the gentlest effective \
                    recovery modalities.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn profile(weight_kg: f64) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            age: 35,
            gender: "female".to_string(),
            height_cm: 170.0,
            weight_kg,
            goal: "general_fitness".to_string(),
            activity_level: ActivityLevel::ModeratelyActive,
            fitness_level: 5,
        }
    }

    fn status() -> HealthStatus {
        HealthStatus {
            bmi: 24.0,
            weight_loss_needed: false,
            muscle_gain_needed: false,
            endurance_needed: false,
            flexibility_needed: false,
            stress_relief_needed: false,
            recovery_needed: false,
            fitness_level: 5,
        }
    }

    #[test]
    fn precedence_picks_first_matching_focus() {
        let mut s = status();
        s.weight_loss_needed = true;
        s.muscle_gain_needed = true;
        s.endurance_needed = true;
        assert_eq!(
            CandidateGenerationService::primary_focus(&s),
            NutritionalFocus::WeightLoss
        );

        s.weight_loss_needed = false;
        assert_eq!(
            CandidateGenerationService::primary_focus(&s),
            NutritionalFocus::MuscleGain
        );

        s.muscle_gain_needed = false;
        assert_eq!(
            CandidateGenerationService::primary_focus(&s),
            NutritionalFocus::Endurance
        );
    }

    #[test]
    fn no_flags_fall_back_to_balanced_set() {
        let candidates =
            CandidateGenerationService::new().generate(&profile(70.0), &status(), &[], 60);

        assert!(!candidates.is_empty());
        assert!(candidates
            .iter()
            .all(|c| c.nutritional_focus == NutritionalFocus::Balance));
    }

    #[test]
    fn overlays_are_appended_after_the_primary_set() {
        let mut s = status();
        s.weight_loss_needed = true;
        s.stress_relief_needed = true;
        s.recovery_needed = true;

        let candidates =
            CandidateGenerationService::new().generate(&profile(70.0), &s, &[], 60);

        let first_stress = candidates
            .iter()
            .position(|c| c.nutritional_focus == NutritionalFocus::StressRelief)
            .unwrap();
        let first_recovery = candidates
            .iter()
            .position(|c| c.nutritional_focus == NutritionalFocus::Recovery)
            .unwrap();

        assert_eq!(
            candidates[0].nutritional_focus,
            NutritionalFocus::WeightLoss
        );
        assert!(first_stress < first_recovery);
        assert_eq!(
            candidates.len(),
            WEIGHT_LOSS_TEMPLATES.len()
                + STRESS_RELIEF_TEMPLATES.len()
                + RECOVERY_TEMPLATES.len()
        );
    }

    #[test]
    fn calorie_estimate_matches_reference_formula() {
        let service = CandidateGenerationService::new();

        // 70 kg, HIGH intensity, 45 minutes within the time budget
        assert_eq!(
            service.estimate_calories(Intensity::High, 45, 60, 70.0),
            450
        );

        // Time budget caps the effective duration
        assert_eq!(
            service.estimate_calories(Intensity::High, 45, 30, 70.0),
            300
        );

        // Heavier user burns proportionally more, truncated to an integer
        assert_eq!(
            service.estimate_calories(Intensity::Moderate, 30, 60, 80.0),
            205
        );
    }

    #[test]
    fn equipment_is_pre_intersected_with_availability() {
        let mut s = status();
        s.muscle_gain_needed = true;

        let candidates = CandidateGenerationService::new().generate(
            &profile(70.0),
            &s,
            &[Equipment::Dumbbells],
            60,
        );

        let upper = candidates.iter().find(|c| c.name == "Upper Body Builder").unwrap();
        assert_eq!(upper.equipment, vec![Equipment::Dumbbells]);

        // Bodyweight option survives with no equipment at all
        let calisthenics = candidates
            .iter()
            .find(|c| c.name == "Progressive Calisthenics")
            .unwrap();
        assert!(calisthenics.equipment.contains(&Equipment::None));
    }

    #[test]
    fn difficulty_follows_derived_fitness_level() {
        let service = CandidateGenerationService::new();
        let tiers = [
            (2, Difficulty::Beginner),
            (5, Difficulty::Intermediate),
            (7, Difficulty::Advanced),
            (9, Difficulty::Expert),
        ];

        for (level, expected) in tiers {
            let mut s = status();
            s.fitness_level = level;
            let candidates = service.generate(&profile(70.0), &s, &[], 60);
            assert!(candidates.iter().all(|c| c.difficulty == expected));
        }
    }

    #[test]
    fn every_primary_set_can_fill_a_week() {
        // Each set needs a strength, a yoga-or-flexibility and a
        // low-intensity entry for the day rules to land on. The flexibility
        // set deliberately carries no cardio; Tuesday falls back there.
        for templates in [
            WEIGHT_LOSS_TEMPLATES,
            MUSCLE_GAIN_TEMPLATES,
            ENDURANCE_TEMPLATES,
            FLEXIBILITY_TEMPLATES,
            BALANCED_TEMPLATES,
        ] {
            assert!(templates
                .iter()
                .any(|t| t.workout_type == WorkoutType::StrengthTraining));
            assert!(templates.iter().any(|t| matches!(
                t.workout_type,
                WorkoutType::Yoga | WorkoutType::Flexibility
            )));
            assert!(templates.iter().any(|t| t.intensity == Intensity::Low));
        }

        for templates in [
            WEIGHT_LOSS_TEMPLATES,
            MUSCLE_GAIN_TEMPLATES,
            ENDURANCE_TEMPLATES,
            BALANCED_TEMPLATES,
        ] {
            assert!(templates.iter().any(|t| matches!(
                t.workout_type,
                WorkoutType::Cardio | WorkoutType::Hiit
            )));
        }
    }
}
