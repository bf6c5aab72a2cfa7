// ABOUTME: Per-exercise performance history and personal record entities
// ABOUTME: One record per exercise name, upserted each time a workout containing it completes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::WorkoutSet;

/// Best values ever recorded for an exercise
///
/// Every field is a running maximum and never decreases. `max_volume` is the best
/// single-set `weight × reps`, not a workout total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Heaviest weight lifted in a completed set
    pub max_weight: f64,
    /// Most reps in a completed set
    pub max_reps: u32,
    /// Highest single-set volume
    pub max_volume: f64,
}

/// Historical performance for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseHistory {
    /// Exercise catalog key
    pub exercise_name: String,
    /// Date of the most recent workout containing the exercise
    pub last_performed: NaiveDate,
    /// Sets exactly as they were when that workout finished
    pub last_sets: Vec<WorkoutSet>,
    /// Running personal records
    pub personal_record: PersonalRecord,
}
