// ABOUTME: Training volume calculations over completed sets
// ABOUTME: Incomplete sets contribute zero regardless of entered weight and reps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use liftlog_core::models::{ActiveExercise, WorkoutSet};

/// Volume of one exercise: `Σ weight × reps` over completed sets
#[must_use]
pub fn exercise_volume(exercise: &ActiveExercise) -> f64 {
    exercise
        .sets
        .iter()
        .filter(|set| set.completed)
        .map(WorkoutSet::volume)
        .sum()
}

/// Workout volume: sum of [`exercise_volume`] over every exercise
#[must_use]
pub fn total_volume(exercises: &[ActiveExercise]) -> f64 {
    exercises.iter().map(exercise_volume).sum()
}
