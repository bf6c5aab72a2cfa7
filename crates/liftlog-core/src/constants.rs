// ABOUTME: Application-wide constants: store keys per subsystem, partitions, and training defaults
// ABOUTME: Each subsystem owns a disjoint key set so no cross-subsystem writes occur
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Constants Module
//!
//! Store keys are grouped by owning subsystem. The clock, history tracker and
//! session orchestrator never read or write each other's keys.

/// Keys owned by the clock engine
pub mod clock_keys {
    /// Current mode (`stopwatch` or `timer`)
    pub const MODE: &str = "clock.mode";
    /// Whether the primary tick is live
    pub const TIMER_ACTIVE: &str = "clock.timer_active";
    /// Utility stopwatch elapsed seconds
    pub const DURATION: &str = "clock.duration";
    /// Countdown seconds remaining
    pub const COUNTDOWN_REMAINING: &str = "clock.countdown_remaining";
    /// Recorded laps, most recent first
    pub const LAPS: &str = "clock.laps";
    /// Countdown minute input buffer
    pub const TIMER_MINUTES: &str = "clock.timer_minutes";
    /// Countdown second input buffer
    pub const TIMER_SECONDS: &str = "clock.timer_seconds";
    /// Rest timer seconds remaining
    pub const REST_REMAINING: &str = "clock.rest_remaining";
    /// Dedicated workout duration counter
    pub const WORKOUT_ELAPSED: &str = "clock.workout_elapsed";
    /// Whether the workout duration counter is ticking
    pub const WORKOUT_ACTIVE: &str = "clock.workout_active";
}

/// Keys owned by the session orchestrator
pub mod session_keys {
    /// Current workflow phase
    pub const PHASE: &str = "session.phase";
    /// Selected muscle groups
    pub const MUSCLES: &str = "session.muscles";
    /// Selected exercise names
    pub const SELECTED_EXERCISES: &str = "session.selected_exercises";
    /// In-progress exercises with their sets
    pub const ACTIVE_EXERCISES: &str = "session.active_exercises";

    /// Keys cleared when a workout is finished or the session is reset
    pub const SESSION_SCOPED: [&str; 4] = [PHASE, MUSCLES, SELECTED_EXERCISES, ACTIVE_EXERCISES];
}

/// Keys owned by the exercise history tracker
pub mod history_keys {
    /// Map of exercise name to history record
    pub const EXERCISE_HISTORY: &str = "history.exercises";
}

/// Training defaults
pub mod training {
    /// Rest interval started when a set is marked complete
    pub const DEFAULT_REST_SECONDS: u32 = 90;
    /// Weight added by the overload policy when reps are held steady
    pub const DEFAULT_WEIGHT_INCREMENT_KG: f64 = 2.5;
    /// Rep count at which the overload policy switches from reps to weight
    pub const DEFAULT_REP_CEILING: u32 = 12;
    /// Seconds added by a single "add rest time" action
    pub const REST_EXTENSION_SECONDS: i64 = 30;
}

/// Clock scheduling defaults
pub mod clock {
    /// Tick period in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 1000;
}

/// Backup document format
pub mod backup {
    /// Current export format version
    pub const FORMAT_VERSION: u32 = 1;
    /// Longest workout duration accepted on import (one week)
    pub const MAX_WORKOUT_DURATION_SECONDS: u64 = 7 * 24 * 60 * 60;
}

/// Service identity for structured logging
pub mod service_names {
    /// Service name reported in log records
    pub const LIFTLOG: &str = "liftlog";
}
