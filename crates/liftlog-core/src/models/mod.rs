// ABOUTME: Core data models and types for the Liftlog workout tracker
// ABOUTME: Re-exports sets, exercises, completed workouts, history records, and phase enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Data Models
//!
//! Canonical domain shapes shared by the clock, history tracker and session
//! orchestrator. All models serialize to camelCase JSON so persisted documents stay
//! stable across releases.
//!
//! ## Core Models
//!
//! - `WorkoutSet`: One logged attempt with weight and reps
//! - `ActiveExercise`: An exercise in the running session with its ordered sets
//! - `CompletedWorkout`: Immutable snapshot taken at workout completion
//! - `ExerciseHistory`: Per-exercise last performance and personal records
//! - `SessionPhase` / `ClockMode`: State machine enums

mod clock;
mod history;
mod muscle;
mod phase;
mod plan;
mod template;
mod workout;

pub use clock::ClockMode;
pub use history::{ExerciseHistory, PersonalRecord};
pub use muscle::MuscleGroup;
pub use phase::SessionPhase;
pub use plan::{ExperienceLevel, PlanRequest, PlannedExercise, WorkoutPlan};
pub use template::WorkoutTemplate;
pub use workout::{ActiveExercise, CompletedWorkout, SetUpdate, WorkoutSet};
