// ABOUTME: Aggregate statistics over the completed workout log
// ABOUTME: Totals, averages, most frequent exercise, and consecutive-day training streak
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::collections::{BTreeSet, HashMap};

use chrono::{Duration, NaiveDate};
use liftlog_core::models::CompletedWorkout;
use serde::{Deserialize, Serialize};

/// Summary of the workout log
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutStats {
    /// Number of workouts logged
    pub total_workouts: usize,
    /// Sum of workout volumes
    pub total_volume: f64,
    /// Sum of workout durations
    pub total_duration_seconds: u64,
    /// Mean workout duration, 0 when the log is empty
    pub average_duration_seconds: u64,
    /// Completed sets across all workouts
    pub total_completed_sets: usize,
    /// Exercise appearing in the most workouts (ties broken alphabetically)
    pub most_frequent_exercise: Option<String>,
}

impl WorkoutStats {
    /// Compute statistics over a workout log in any order
    #[must_use]
    pub fn from_workouts(workouts: &[CompletedWorkout]) -> Self {
        if workouts.is_empty() {
            return Self::default();
        }

        let total_duration_seconds = workouts
            .iter()
            .map(|w| w.duration_seconds)
            .fold(0_u64, u64::saturating_add);
        let mut frequency: HashMap<&str, usize> = HashMap::new();
        for workout in workouts {
            for exercise in &workout.exercises {
                *frequency.entry(exercise.name.as_str()).or_default() += 1;
            }
        }

        let most_frequent_exercise = frequency
            .into_iter()
            .max_by(|(name_a, count_a), (name_b, count_b)| {
                count_a.cmp(count_b).then_with(|| name_b.cmp(name_a))
            })
            .map(|(name, _)| name.to_owned());

        Self {
            total_workouts: workouts.len(),
            total_volume: workouts.iter().map(|w| w.total_volume).sum(),
            total_duration_seconds,
            average_duration_seconds: total_duration_seconds / workouts.len() as u64,
            total_completed_sets: workouts
                .iter()
                .map(CompletedWorkout::completed_set_count)
                .sum(),
            most_frequent_exercise,
        }
    }
}

/// Consecutive training days ending today, or yesterday if today has no workout yet
#[must_use]
pub fn current_streak_days(workouts: &[CompletedWorkout], today: NaiveDate) -> u32 {
    let days: BTreeSet<NaiveDate> = workouts
        .iter()
        .map(|w| w.completed_at.date_naive())
        .collect();

    let mut cursor = if days.contains(&today) {
        today
    } else {
        today - Duration::days(1)
    };

    let mut streak = 0;
    while days.contains(&cursor) {
        streak += 1;
        cursor -= Duration::days(1);
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use liftlog_core::models::{ActiveExercise, WorkoutSet};
    use uuid::Uuid;

    fn workout(day: u32, exercises: &[&str], volume: f64, duration: u64) -> CompletedWorkout {
        CompletedWorkout {
            id: Uuid::new_v4(),
            date: format!("2026-03-{day:02}"),
            completed_at: Utc.with_ymd_and_hms(2026, 3, day, 18, 0, 0).unwrap(),
            name: None,
            duration_seconds: duration,
            exercises: exercises
                .iter()
                .map(|name| {
                    let mut set = WorkoutSet::with_target(50.0, 10);
                    set.completed = true;
                    ActiveExercise {
                        name: (*name).to_owned(),
                        sets: vec![set],
                    }
                })
                .collect(),
            total_volume: volume,
        }
    }

    #[test]
    fn test_stats_aggregate_log() {
        let log = vec![
            workout(1, &["Squat", "Bench Press"], 1000.0, 3000),
            workout(3, &["Squat"], 500.0, 1800),
        ];
        let stats = WorkoutStats::from_workouts(&log);
        assert_eq!(stats.total_workouts, 2);
        assert!((stats.total_volume - 1500.0).abs() < f64::EPSILON);
        assert_eq!(stats.average_duration_seconds, 2400);
        assert_eq!(stats.total_completed_sets, 3);
        assert_eq!(stats.most_frequent_exercise.as_deref(), Some("Squat"));
    }

    #[test]
    fn test_huge_durations_saturate_instead_of_overflowing() {
        let log = vec![
            workout(1, &["Squat"], 0.0, u64::MAX / 2 + 1),
            workout(2, &["Squat"], 0.0, u64::MAX / 2 + 1),
        ];
        let stats = WorkoutStats::from_workouts(&log);
        assert_eq!(stats.total_duration_seconds, u64::MAX);
        assert_eq!(stats.average_duration_seconds, u64::MAX / 2);
    }

    #[test]
    fn test_empty_log_yields_default_stats() {
        assert_eq!(WorkoutStats::from_workouts(&[]), WorkoutStats::default());
    }

    #[test]
    fn test_streak_counts_back_from_yesterday() {
        let log = vec![
            workout(1, &["Squat"], 0.0, 0),
            workout(2, &["Squat"], 0.0, 0),
            workout(3, &["Squat"], 0.0, 0),
        ];
        let today = NaiveDate::from_ymd_opt(2026, 3, 4).unwrap();
        assert_eq!(current_streak_days(&log, today), 3);
        let later = NaiveDate::from_ymd_opt(2026, 3, 6).unwrap();
        assert_eq!(current_streak_days(&log, later), 0);
    }
}
