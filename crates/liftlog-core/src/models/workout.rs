// ABOUTME: Workout set, active exercise, and completed workout entities
// ABOUTME: Sets are mutated in place during a session; completed workouts are immutable snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One logged attempt at an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSet {
    /// Opaque unique identifier
    pub id: Uuid,
    /// Load in kilograms, never negative
    pub weight: f64,
    /// Repetitions performed
    pub reps: u32,
    /// Whether the user marked the set done
    pub completed: bool,
    /// Time under load for timed exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,
    /// Distance covered for cardio exercises
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl WorkoutSet {
    /// Create an empty, incomplete set (`weight = 0`, `reps = 0`)
    #[must_use]
    pub fn empty() -> Self {
        Self::with_target(0.0, 0)
    }

    /// Create an incomplete set pre-filled with a weight and rep target
    #[must_use]
    pub fn with_target(weight: f64, reps: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            weight: sanitize_weight(weight).unwrap_or(0.0),
            reps,
            completed: false,
            duration_seconds: None,
            distance_km: None,
        }
    }

    /// Single-set volume (`weight × reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }

    /// Whether the user has typed anything into this set yet
    #[must_use]
    pub fn is_untouched(&self) -> bool {
        !self.completed && self.reps == 0 && self.weight <= 0.0
    }

    /// Apply a partial edit. Invalid values (negative or non-finite) are ignored.
    pub fn apply(&mut self, update: &SetUpdate) {
        if let Some(weight) = update.weight.and_then(sanitize_weight) {
            self.weight = weight;
        }
        if let Some(reps) = update.reps {
            self.reps = reps;
        }
        if let Some(duration) = update.duration_seconds {
            self.duration_seconds = Some(duration);
        }
        if let Some(distance) = update.distance_km.and_then(sanitize_weight) {
            self.distance_km = Some(distance);
        }
    }
}

fn sanitize_weight(value: f64) -> Option<f64> {
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Partial edit of a set's fields, used by the session's set editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetUpdate {
    /// New weight
    pub weight: Option<f64>,
    /// New rep count
    pub reps: Option<u32>,
    /// New duration
    pub duration_seconds: Option<u32>,
    /// New distance
    pub distance_km: Option<f64>,
}

/// An exercise chosen for the active session with its ordered sets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveExercise {
    /// Exercise catalog key
    pub name: String,
    /// Ordered sets as entered
    pub sets: Vec<WorkoutSet>,
}

impl ActiveExercise {
    /// Fresh entry with exactly one empty set
    #[must_use]
    pub fn fresh(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sets: vec![WorkoutSet::empty()],
        }
    }

    /// Number of sets marked completed
    #[must_use]
    pub fn completed_sets(&self) -> usize {
        self.sets.iter().filter(|set| set.completed).count()
    }
}

/// Snapshot of a finished workout. Created once at completion and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedWorkout {
    /// Record identifier
    pub id: Uuid,
    /// Display date
    pub date: String,
    /// Completion instant, used for history ordering and `lastPerformed`
    pub completed_at: DateTime<Utc>,
    /// Display name derived from the selected muscle groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Workout clock value at completion
    pub duration_seconds: u64,
    /// Exercises exactly as they were at finish time
    pub exercises: Vec<ActiveExercise>,
    /// Sum of `weight × reps` over completed sets
    pub total_volume: f64,
}

impl CompletedWorkout {
    /// Number of completed sets across all exercises
    #[must_use]
    pub fn completed_set_count(&self) -> usize {
        self.exercises
            .iter()
            .map(ActiveExercise::completed_sets)
            .sum()
    }
}
