use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::models::{DayOfWeek, Intensity, WeeklyWorkout, WorkoutRecommendation, WorkoutType};

/// Selection rule for one weekday, applied over the candidate sequence in
/// order. `nth` counts matches: 0 is the first candidate of a matching
/// type, 1 the second.
enum DayArchetype {
    NthOfTypes {
        types: &'static [WorkoutType],
        nth: usize,
    },
    FirstLowIntensity,
}

/// Fixed weekday archetypes, evaluated first-match against the candidate
/// order. Thursday asks for the second strength session and settles for
/// the first when the catalog only has one.
const DAY_ARCHETYPES: &[(DayOfWeek, DayArchetype)] = &[
    (
        DayOfWeek::Monday,
        DayArchetype::NthOfTypes {
            types: &[WorkoutType::StrengthTraining],
            nth: 0,
        },
    ),
    (
        DayOfWeek::Tuesday,
        DayArchetype::NthOfTypes {
            types: &[WorkoutType::Cardio, WorkoutType::Hiit],
            nth: 0,
        },
    ),
    (
        DayOfWeek::Wednesday,
        DayArchetype::NthOfTypes {
            types: &[WorkoutType::Flexibility, WorkoutType::Yoga],
            nth: 0,
        },
    ),
    (
        DayOfWeek::Thursday,
        DayArchetype::NthOfTypes {
            types: &[WorkoutType::StrengthTraining],
            nth: 1,
        },
    ),
    (
        DayOfWeek::Friday,
        DayArchetype::NthOfTypes {
            types: &[WorkoutType::Cardio, WorkoutType::FunctionalTraining],
            nth: 0,
        },
    ),
    (
        DayOfWeek::Saturday,
        DayArchetype::NthOfTypes {
            types: &[WorkoutType::Yoga, WorkoutType::Flexibility],
            nth: 0,
        },
    ),
    (DayOfWeek::Sunday, DayArchetype::FirstLowIntensity),
];

/// Assigns catalog entries to weekdays under the fixed archetype rules and
/// replicates the weekly structure across the plan duration.
#[derive(Debug, Clone, Default)]
pub struct WeeklyScheduleService;

impl WeeklyScheduleService {
    pub fn new() -> Self {
        Self
    }

    pub fn schedule(
        &self,
        candidates: &[WorkoutRecommendation],
        duration_weeks: u32,
        workout_days_per_week: u8,
    ) -> Vec<WeeklyWorkout> {
        (1..=duration_weeks)
            .map(|week| self.build_week(week, candidates, workout_days_per_week))
            .collect()
    }

    fn build_week(
        &self,
        week_number: u32,
        candidates: &[WorkoutRecommendation],
        workout_days_per_week: u8,
    ) -> WeeklyWorkout {
        let week_days = DayOfWeek::WEEK;
        let day_count = usize::from(workout_days_per_week).min(week_days.len());
        let (workout_days, rest_days) = week_days.split_at(day_count);

        let mut daily_workouts: BTreeMap<DayOfWeek, Vec<WorkoutRecommendation>> = BTreeMap::new();
        for day in workout_days {
            let assigned = Self::select_for_day(*day, candidates)
                .map(|w| vec![w.clone()])
                .unwrap_or_default();
            daily_workouts.insert(*day, assigned);
        }

        debug!(
            week_number,
            workout_days = day_count,
            "built weekly schedule"
        );

        WeeklyWorkout {
            week_number,
            daily_workouts,
            rest_days: rest_days.iter().copied().collect::<BTreeSet<_>>(),
            weekly_goals: Self::weekly_goals(week_number),
        }
    }

    fn select_for_day(
        day: DayOfWeek,
        candidates: &[WorkoutRecommendation],
    ) -> Option<&WorkoutRecommendation> {
        let archetype = DAY_ARCHETYPES
            .iter()
            .find(|(d, _)| *d == day)
            .map(|(_, rule)| rule)?;

        let picked = match archetype {
            DayArchetype::NthOfTypes { types, nth } => {
                let mut matches = candidates
                    .iter()
                    .filter(|c| types.contains(&c.workout_type));
                match matches.clone().nth(*nth) {
                    Some(hit) => Some(hit),
                    // A later occurrence was asked for but does not exist;
                    // settle for the first of the type.
                    None => matches.next(),
                }
            }
            DayArchetype::FirstLowIntensity => {
                candidates.iter().find(|c| c.intensity == Intensity::Low)
            }
        };

        picked
            .or_else(|| {
                candidates
                    .iter()
                    .find(|c| c.workout_type == WorkoutType::FunctionalTraining)
            })
            .or_else(|| candidates.first())
    }

    /// Goal text per plan week. Weeks past the fourth repeat the
    /// maintenance message.
    fn weekly_goals(week_number: u32) -> Vec<String> {
        let goals: &[&str] = match week_number {
            1 => &[
                "Establish your workout routine",
                "Learn the movements at a comfortable effort",
                "Finish every planned session, even shortened",
            ],
            2 => &[
                "Increase intensity on the main sessions",
                "Add a little load or pace where form allows",
            ],
            3 => &[
                "Push through plateaus",
                "Aim to beat week-two numbers on at least two days",
            ],
            4 => &[
                "Complete the block strong",
                "Assess progress against your starting point",
            ],
            _ => &[
                "Maintain the routine you have built",
                "Keep sessions consistent and recovery honest",
            ],
        };
        goals.iter().map(|g| g.to_string()).collect()
    }
}
