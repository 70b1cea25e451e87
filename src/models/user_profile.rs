use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Physical profile supplied by the caller, immutable for the duration of
/// one engine invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub height_cm: f64,
    pub weight_kg: f64,
    /// Free-text goal tag, e.g. "muscle_gain".
    pub goal: String,
    pub activity_level: ActivityLevel,
    /// Self-assessed level on a 1-10 scale.
    pub fitness_level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtremelyActive,
}

impl ActivityLevel {
    /// Adjustment this level contributes to the derived fitness score.
    pub fn fitness_adjustment(&self) -> i32 {
        match self {
            ActivityLevel::Sedentary => -2,
            ActivityLevel::LightlyActive => -1,
            ActivityLevel::ModeratelyActive => 0,
            ActivityLevel::VeryActive => 1,
            ActivityLevel::ExtremelyActive => 2,
        }
    }
}
