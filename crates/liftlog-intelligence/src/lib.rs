// ABOUTME: Workout intelligence algorithms for volume, personal records, and progressive overload
// ABOUTME: Pure functions over domain models so they can be tested and benchmarked in isolation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

#![deny(unsafe_code)]

//! # Liftlog Intelligence
//!
//! Computation engine behind the history tracker and workout summary:
//!
//! - **volume**: workout and exercise volume over completed sets
//! - **records**: running personal-record maxima
//! - **overload**: next-session set scheme derived from the last performance
//! - **stats**: aggregate statistics over the workout log

/// Volume computation over completed sets
pub mod volume;

/// Personal record merging
pub mod records;

/// Progressive overload suggestion policy
pub mod overload;

/// Aggregate workout statistics
pub mod stats;

pub use overload::{OverloadPolicy, OverloadStrategy, OverloadSuggestion, SuggestedSet};
pub use records::merge_personal_record;
pub use stats::{current_streak_days, WorkoutStats};
pub use volume::{exercise_volume, total_volume};
