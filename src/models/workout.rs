use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::plan::DayOfWeek;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    StrengthTraining,
    Cardio,
    Yoga,
    Pilates,
    Hiit,
    Flexibility,
    Balance,
    Sports,
    Dance,
    Swimming,
    Cycling,
    Running,
    Walking,
    Bodyweight,
    FunctionalTraining,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Intensity {
    /// Calorie burn rate in kcal/min for a 70 kg reference body weight.
    pub fn calories_per_minute(&self) -> f64 {
        match self {
            Intensity::Low => 3.0,
            Intensity::Moderate => 6.0,
            Intensity::High => 10.0,
            Intensity::VeryHigh => 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    /// Maps a 1-10 fitness level onto a difficulty tier.
    pub fn for_fitness_level(level: u8) -> Self {
        match level {
            0..=2 => Difficulty::Beginner,
            3..=5 => Difficulty::Intermediate,
            6..=7 => Difficulty::Advanced,
            _ => Difficulty::Expert,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    FullBody,
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Glutes,
    Quadriceps,
    Hamstrings,
    Calves,
    Obliques,
    LowerBack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    None,
    Dumbbells,
    Barbell,
    Kettlebell,
    ResistanceBands,
    YogaMat,
    PullUpBar,
    Bench,
    TreadmillOrOpenSpace,
    StationaryBike,
    JumpRope,
    FoamRoller,
    Pool,
}

impl Equipment {
    /// Availability set used for matching. Bodyweight work needs nothing,
    /// so `None` is always usable regardless of what the caller owns.
    pub fn effective_availability(available: &[Equipment]) -> Vec<Equipment> {
        let mut effective = available.to_vec();
        if !effective.contains(&Equipment::None) {
            effective.push(Equipment::None);
        }
        effective
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionalFocus {
    WeightLoss,
    MuscleGain,
    Endurance,
    Flexibility,
    Strength,
    Recovery,
    EnergyBoost,
    StressRelief,
    Balance,
}

/// A single workout candidate, produced by generation and refined by
/// personalization. Immutable apart from `is_recommended`, which is set
/// exactly once when the catalog is ranked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub workout_type: WorkoutType,
    pub intensity: Intensity,
    pub duration_minutes: u32,
    pub calories_burn: u32,
    pub muscle_groups: Vec<MuscleGroup>,
    pub equipment: Vec<Equipment>,
    pub difficulty: Difficulty,
    pub nutritional_focus: NutritionalFocus,
    pub recommended_days: Vec<DayOfWeek>,
    pub contraindications: Vec<String>,
    /// Step order is significant.
    pub instructions: Vec<String>,
    pub reasoning: String,
    pub is_recommended: bool,
}
