// ABOUTME: Request and response shapes for remote AI workout plan generation
// ABOUTME: The generator is opaque; the core only branches on plan present versus absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use serde::{Deserialize, Serialize};

use super::MuscleGroup;

/// Training experience used to scale generated plans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    /// Under a year of consistent training
    #[default]
    Beginner,
    /// One to three years
    Intermediate,
    /// Three years or more
    Advanced,
}

/// Input for a plan generation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Target muscle groups
    pub muscles: Vec<MuscleGroup>,
    /// Experience level
    pub level: ExperienceLevel,
    /// Optional free-text focus notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
}

/// A generated workout plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Plan title
    pub title: String,
    /// Short description
    pub description: String,
    /// Human-readable estimated duration, e.g. "45 min"
    pub estimated_duration: String,
    /// Planned exercises in order
    pub exercises: Vec<PlannedExercise>,
}

/// One exercise of a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedExercise {
    /// Exercise name
    pub name: String,
    /// Number of working sets
    pub sets: u32,
    /// Rep prescription as text, e.g. "8-10"
    pub reps: String,
    /// Coaching notes
    #[serde(default)]
    pub notes: String,
}

impl PlannedExercise {
    /// Leading integer of the rep prescription ("8-10" → 8), or 0 when absent
    #[must_use]
    pub fn rep_target(&self) -> u32 {
        let digits: String = self
            .reps
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect();
        digits.parse().unwrap_or(0)
    }
}
