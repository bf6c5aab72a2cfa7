// ABOUTME: Clock engine advancing stopwatch, countdown, rest timer and workout duration on one tick
// ABOUTME: Every field is persisted on change and rehydrated with defaults on load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Clock Engine
//!
//! One engine owns every timing concern of a session:
//!
//! - the utility **stopwatch** (`duration`, `laps`), advanced while
//!   `timer_active` in [`ClockMode::Stopwatch`];
//! - the utility **countdown** (`countdown_remaining`), decremented while
//!   `timer_active` in [`ClockMode::Timer`];
//! - the **rest timer** (`rest_remaining`), orthogonal to mode and active flag;
//! - the **workout duration** counter (`workout_elapsed`), a separate counter
//!   owned by the session orchestrator's start/finish transitions.
//!
//! All four advance from [`ClockEngine::tick`], which the single task in
//! [`driver::ClockDriver`] calls once per period. Elapsed wall time while the
//! process is not running is not reconciled; counters resume from their last
//! persisted value.

/// Tokio task that drives the shared tick
pub mod driver;

pub use driver::ClockDriver;

use std::sync::Arc;

use liftlog_core::constants::clock_keys;
use liftlog_core::models::ClockMode;
use serde::Serialize;
use tokio::sync::{Mutex, Notify};
use tracing::debug;

use crate::feedback::FeedbackSink;
use crate::logging::AppLogger;
use crate::store::{KeyValueStore, KeyValueStoreExt};

/// Clock engine shared between the session, the tick driver and the UI
pub type SharedClock = Arc<Mutex<ClockEngine>>;

/// Snapshot of every clock field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClockState {
    /// Stopwatch or countdown
    pub mode: ClockMode,
    /// Whether the primary tick (stopwatch or countdown) is live
    pub timer_active: bool,
    /// Utility stopwatch elapsed seconds
    pub duration: u64,
    /// Countdown seconds remaining
    pub countdown_remaining: Option<u64>,
    /// Lap times, most recent first
    pub laps: Vec<u64>,
    /// Rest timer seconds remaining
    pub rest_remaining: Option<u64>,
    /// Countdown minute input buffer
    pub timer_minutes: u32,
    /// Countdown second input buffer
    pub timer_seconds: u32,
    /// Workout duration counter
    pub workout_elapsed: u64,
    /// Whether the workout duration counter is ticking
    pub workout_active: bool,
}

/// Completion events produced by one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The countdown finished on this tick
    pub countdown_finished: bool,
    /// The rest timer finished on this tick
    pub rest_finished: bool,
}

/// Timing state machine with write-through persistence
pub struct ClockEngine {
    state: ClockState,
    kv: Arc<dyn KeyValueStore>,
    feedback: Arc<dyn FeedbackSink>,
    wake: Option<Arc<Notify>>,
}

impl ClockEngine {
    /// Rehydrate the engine from the store, defaulting absent or malformed fields
    #[must_use]
    pub fn load(kv: Arc<dyn KeyValueStore>, feedback: Arc<dyn FeedbackSink>) -> Self {
        let state = ClockState {
            mode: kv.get_parsed_or(clock_keys::MODE, ClockMode::default()),
            timer_active: kv.get_parsed_or(clock_keys::TIMER_ACTIVE, false),
            duration: kv.get_parsed_or(clock_keys::DURATION, 0),
            countdown_remaining: kv.get_parsed_or(clock_keys::COUNTDOWN_REMAINING, None),
            laps: kv.get_parsed_or(clock_keys::LAPS, Vec::new()),
            rest_remaining: kv
                .get_parsed_or(clock_keys::REST_REMAINING, None)
                .filter(|remaining: &u64| *remaining > 0),
            timer_minutes: kv.get_parsed_or(clock_keys::TIMER_MINUTES, 0),
            timer_seconds: kv.get_parsed_or(clock_keys::TIMER_SECONDS, 0),
            workout_elapsed: kv.get_parsed_or(clock_keys::WORKOUT_ELAPSED, 0),
            workout_active: kv.get_parsed_or(clock_keys::WORKOUT_ACTIVE, false),
        };
        debug!(?state, "Clock engine loaded");
        Self {
            state,
            kv,
            feedback,
            wake: None,
        }
    }

    /// Wrap the engine for sharing with a driver
    #[must_use]
    pub fn into_shared(self) -> SharedClock {
        Arc::new(Mutex::new(self))
    }

    /// Register the notifier woken whenever something starts needing ticks
    pub fn attach_wake(&mut self, wake: Arc<Notify>) {
        if self.needs_ticking() {
            wake.notify_one();
        }
        self.wake = Some(wake);
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &ClockState {
        &self.state
    }

    /// Current mode
    #[must_use]
    pub const fn mode(&self) -> ClockMode {
        self.state.mode
    }

    /// Whether the primary tick is live
    #[must_use]
    pub const fn timer_active(&self) -> bool {
        self.state.timer_active
    }

    /// Utility stopwatch seconds
    #[must_use]
    pub const fn duration(&self) -> u64 {
        self.state.duration
    }

    /// Countdown seconds remaining
    #[must_use]
    pub const fn countdown_remaining(&self) -> Option<u64> {
        self.state.countdown_remaining
    }

    /// Laps, most recent first
    #[must_use]
    pub fn laps(&self) -> &[u64] {
        &self.state.laps
    }

    /// Rest seconds remaining
    #[must_use]
    pub const fn rest_remaining(&self) -> Option<u64> {
        self.state.rest_remaining
    }

    /// Workout duration seconds
    #[must_use]
    pub const fn workout_elapsed(&self) -> u64 {
        self.state.workout_elapsed
    }

    /// Whether the workout duration counter is ticking
    #[must_use]
    pub const fn workout_active(&self) -> bool {
        self.state.workout_active
    }

    /// Whether any counter advances on the next tick
    #[must_use]
    pub fn needs_ticking(&self) -> bool {
        self.state.timer_active
            || self.state.workout_active
            || self.state.rest_remaining.is_some_and(|remaining| remaining > 0)
    }

    /// Switch between stopwatch and countdown without touching counters
    pub fn set_mode(&mut self, mode: ClockMode) {
        if self.state.mode != mode {
            self.state.mode = mode;
            self.kv.persist(clock_keys::MODE, &mode);
        }
    }

    /// Start or stop the primary tick; repeating the current value changes nothing
    pub fn set_timer_active(&mut self, active: bool) {
        if self.state.timer_active == active {
            return;
        }
        self.state.timer_active = active;
        self.kv.persist(clock_keys::TIMER_ACTIVE, &active);
        if active {
            self.wake_driver();
        }
    }

    /// Update the countdown input buffers
    pub fn set_timer_inputs(&mut self, minutes: u32, seconds: u32) {
        self.state.timer_minutes = minutes;
        self.state.timer_seconds = seconds;
        self.kv.persist(clock_keys::TIMER_MINUTES, &minutes);
        self.kv.persist(clock_keys::TIMER_SECONDS, &seconds);
    }

    /// Start a countdown of `minutes * 60 + seconds`; non-positive totals do nothing
    pub fn start_timer(&mut self, minutes: i64, seconds: i64) {
        let total = minutes.saturating_mul(60).saturating_add(seconds);
        let Ok(total) = u64::try_from(total) else {
            return;
        };
        if total == 0 {
            return;
        }
        self.state.countdown_remaining = Some(total);
        self.kv
            .persist(clock_keys::COUNTDOWN_REMAINING, &self.state.countdown_remaining);
        self.set_mode(ClockMode::Timer);
        self.set_timer_active(true);
    }

    /// Record the current stopwatch time as the newest lap
    ///
    /// Only valid while the stopwatch is running.
    pub fn add_lap(&mut self) {
        if self.state.mode != ClockMode::Stopwatch || !self.state.timer_active {
            return;
        }
        self.state.laps.insert(0, self.state.duration);
        self.kv.persist(clock_keys::LAPS, &self.state.laps);
    }

    /// Zero the stopwatch, clear laps, countdown and rest, and stop ticking
    ///
    /// Mode and the workout duration counter are left alone.
    pub fn reset_clock(&mut self) {
        self.state.duration = 0;
        self.state.laps.clear();
        self.state.countdown_remaining = None;
        self.state.timer_active = false;
        self.state.rest_remaining = None;

        self.kv.persist(clock_keys::DURATION, &0_u64);
        self.kv.persist(clock_keys::LAPS, &self.state.laps);
        self.kv.persist(clock_keys::COUNTDOWN_REMAINING, &None::<u64>);
        self.kv.persist(clock_keys::TIMER_ACTIVE, &false);
        self.kv.persist(clock_keys::REST_REMAINING, &None::<u64>);
    }

    /// Start (or replace) the rest timer
    pub fn start_rest_timer(&mut self, seconds: u64) {
        self.state.rest_remaining = (seconds > 0).then_some(seconds);
        self.kv
            .persist(clock_keys::REST_REMAINING, &self.state.rest_remaining);
        if self.state.rest_remaining.is_some() {
            self.wake_driver();
        }
    }

    /// Skip the rest timer without a completion cue
    pub fn stop_rest_timer(&mut self) {
        if self.state.rest_remaining.take().is_some() {
            self.kv.persist(clock_keys::REST_REMAINING, &None::<u64>);
        }
    }

    /// Extend (or shorten) a running rest timer; no effect when none is running
    ///
    /// Shortening past zero ends the rest silently.
    pub fn add_rest_time(&mut self, delta_seconds: i64) {
        let Some(remaining) = self.state.rest_remaining else {
            return;
        };
        let adjusted = if delta_seconds >= 0 {
            remaining.saturating_add(delta_seconds.unsigned_abs())
        } else {
            remaining.saturating_sub(delta_seconds.unsigned_abs())
        };
        self.state.rest_remaining = (adjusted > 0).then_some(adjusted);
        self.kv
            .persist(clock_keys::REST_REMAINING, &self.state.rest_remaining);
    }

    /// Start the workout duration counter, returning `true` on a fresh start
    ///
    /// A fresh start is one where the counter was zero and idle; otherwise the
    /// elapsed time is preserved and ticking resumes.
    pub fn start_workout_clock(&mut self) -> bool {
        let fresh = self.state.workout_elapsed == 0 && !self.state.workout_active;
        if !self.state.workout_active {
            self.state.workout_active = true;
            self.kv.persist(clock_keys::WORKOUT_ACTIVE, &true);
            self.wake_driver();
        }
        fresh
    }

    /// Stop the workout duration counter, keeping elapsed time
    pub fn pause_workout_clock(&mut self) {
        if self.state.workout_active {
            self.state.workout_active = false;
            self.kv.persist(clock_keys::WORKOUT_ACTIVE, &false);
        }
    }

    /// Stop and zero the workout duration counter
    pub fn reset_workout_clock(&mut self) {
        self.state.workout_active = false;
        self.state.workout_elapsed = 0;
        self.kv.persist(clock_keys::WORKOUT_ACTIVE, &false);
        self.kv.persist(clock_keys::WORKOUT_ELAPSED, &0_u64);
    }

    /// Advance every live counter by one second
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.state.timer_active {
            match self.state.mode {
                ClockMode::Stopwatch => {
                    self.state.duration = self.state.duration.saturating_add(1);
                    self.kv.persist(clock_keys::DURATION, &self.state.duration);
                }
                ClockMode::Timer => outcome.countdown_finished = self.tick_countdown(),
            }
        }

        outcome.rest_finished = self.tick_rest();

        if self.state.workout_active {
            self.state.workout_elapsed = self.state.workout_elapsed.saturating_add(1);
            self.kv
                .persist(clock_keys::WORKOUT_ELAPSED, &self.state.workout_elapsed);
        }

        outcome
    }

    /// Countdown step; completion fires on the tick after zero is reached
    fn tick_countdown(&mut self) -> bool {
        match self.state.countdown_remaining {
            Some(0) => {
                self.state.countdown_remaining = None;
                self.state.timer_active = false;
                self.kv.persist(clock_keys::COUNTDOWN_REMAINING, &None::<u64>);
                self.kv.persist(clock_keys::TIMER_ACTIVE, &false);
                AppLogger::log_timer_completed("countdown");
                self.feedback.completion_cue();
                true
            }
            Some(remaining) => {
                self.state.countdown_remaining = Some(remaining - 1);
                self.kv
                    .persist(clock_keys::COUNTDOWN_REMAINING, &self.state.countdown_remaining);
                false
            }
            // Active in timer mode with nothing to count down; only setTimerActive stops ticking
            None => false,
        }
    }

    /// Rest step; completion fires on the tick that reaches zero
    fn tick_rest(&mut self) -> bool {
        let Some(remaining) = self.state.rest_remaining else {
            return false;
        };
        let next = remaining.saturating_sub(1);
        if next > 0 {
            self.state.rest_remaining = Some(next);
            self.kv.persist(clock_keys::REST_REMAINING, &next);
            return false;
        }

        self.state.rest_remaining = None;
        self.kv.persist(clock_keys::REST_REMAINING, &None::<u64>);
        if remaining == 0 {
            return false;
        }
        AppLogger::log_timer_completed("rest");
        self.feedback.completion_cue();
        true
    }

    fn wake_driver(&self) {
        if let Some(wake) = &self.wake {
            wake.notify_one();
        }
    }
}

impl std::fmt::Debug for ClockEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockEngine")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
