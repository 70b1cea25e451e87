use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::workout::WorkoutRecommendation;

/// Weekday tag. `Ord` follows calendar order so weekly maps iterate
/// Monday-first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All weekdays in scheduling order.
    pub const WEEK: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];
}

/// One scheduled week. Rest days are disjoint from the workout-day keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyWorkout {
    /// 1-based.
    pub week_number: u32,
    pub daily_workouts: BTreeMap<DayOfWeek, Vec<WorkoutRecommendation>>,
    pub rest_days: BTreeSet<DayOfWeek>,
    pub weekly_goals: Vec<String>,
}

/// Numeric targets for the duration of a plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProgressTracking {
    pub weight_goal_kg: Option<f64>,
    pub strength_goals: HashMap<String, f64>,
    pub endurance_goals: HashMap<String, f64>,
    pub flexibility_goals: HashMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// Plan length in weeks; `workouts.len()` always matches.
    pub duration_weeks: u32,
    pub workouts: Vec<WeeklyWorkout>,
    pub goals: Vec<String>,
    pub nutritional_guidelines: Vec<String>,
    pub progress_tracking: ProgressTracking,
    pub created_at: DateTime<Utc>,
}
