// ABOUTME: Core types and constants for the Liftlog workout tracker
// ABOUTME: Foundation crate with error handling, workout entities, and store key constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog Core
//!
//! Foundation crate providing shared types and constants for the Liftlog workout
//! tracker. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Store keys, partitions, and training defaults
//! - **models**: Workout sets, exercises, completed workouts, history, clock and phase enums

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`WorkoutSet`, `ActiveExercise`, `CompletedWorkout`, etc.)
pub mod models;
