// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory stores, a recording feedback sink and session builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `liftlog`
//!
//! Sessions built here share their stores with the caller so a test can reopen
//! the same data and check what survives a restart.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use liftlog::clock::{ClockEngine, SharedClock};
use liftlog::feedback::{FeedbackSink, HapticPulse};
use liftlog::history::HistoryTracker;
use liftlog::i18n::{Language, Localizer};
use liftlog::models::{ActiveExercise, CompletedWorkout, WorkoutSet};
use liftlog::session::{SessionContext, WorkoutSession};
use liftlog::store::{InMemoryStore, KeyValueStore, RecordStore};
use liftlog_intelligence::{total_volume, OverloadPolicy};
use uuid::Uuid;

/// Rest interval used by test sessions
pub const TEST_REST_SECONDS: u32 = 90;

/// Feedback sink that counts what it was asked to do
#[derive(Debug, Default)]
pub struct RecordingFeedback {
    cues: AtomicUsize,
    haptics: Mutex<Vec<HapticPulse>>,
}

impl RecordingFeedback {
    pub fn cues(&self) -> usize {
        self.cues.load(Ordering::SeqCst)
    }

    pub fn haptics(&self) -> Vec<HapticPulse> {
        self.haptics.lock().unwrap().clone()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn completion_cue(&self) {
        self.cues.fetch_add(1, Ordering::SeqCst);
    }

    fn haptic(&self, pulse: HapticPulse) {
        self.haptics.lock().unwrap().push(pulse);
    }
}

/// One in-memory store standing in for both persistence layers
#[derive(Clone)]
pub struct TestEnv {
    pub store: Arc<InMemoryStore>,
    pub feedback: Arc<RecordingFeedback>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            feedback: Arc::new(RecordingFeedback::default()),
        }
    }

    pub fn kv(&self) -> Arc<dyn KeyValueStore> {
        self.store.clone()
    }

    pub fn records(&self) -> Arc<dyn RecordStore> {
        self.store.clone()
    }

    /// Fresh clock engine loaded from this environment's store
    pub fn clock(&self) -> ClockEngine {
        ClockEngine::load(self.kv(), self.feedback.clone())
    }

    /// Fresh history tracker loaded from this environment's store
    pub fn history(&self) -> HistoryTracker {
        HistoryTracker::load(self.kv(), OverloadPolicy::default())
    }

    /// Open (or reopen) a session over this environment's store
    pub async fn session(&self) -> WorkoutSession {
        self.session_with_clock(self.clock().into_shared()).await
    }

    pub async fn session_with_clock(&self, clock: SharedClock) -> WorkoutSession {
        WorkoutSession::restore(SessionContext {
            kv: self.kv(),
            records: self.records(),
            clock,
            history: self.history(),
            feedback: self.feedback.clone(),
            localizer: Localizer::new(Language::En),
            rest_seconds: TEST_REST_SECONDS,
        })
        .await
        .expect("restore session")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// A set with the given values
pub fn set(weight: f64, reps: u32, completed: bool) -> WorkoutSet {
    WorkoutSet {
        completed,
        ..WorkoutSet::with_target(weight, reps)
    }
}

/// An exercise with the given sets
pub fn exercise(name: &str, sets: Vec<WorkoutSet>) -> ActiveExercise {
    ActiveExercise {
        name: name.to_owned(),
        sets,
    }
}

/// A completed workout finished at `completed_at`
pub fn completed_workout(
    completed_at: DateTime<Utc>,
    exercises: Vec<ActiveExercise>,
) -> CompletedWorkout {
    CompletedWorkout {
        id: Uuid::new_v4(),
        date: completed_at.format("%Y-%m-%d %H:%M").to_string(),
        completed_at,
        name: Some("Test".to_owned()),
        duration_seconds: 1800,
        total_volume: total_volume(&exercises),
        exercises,
    }
}

/// Drive a session from setup into an active workout with the given exercises
pub async fn start_session(session: &mut WorkoutSession, exercises: &[&str]) {
    session.set_muscles([liftlog::models::MuscleGroup::Chest]);
    assert!(session.proceed_to_selection());
    session.set_selected_exercises(exercises.iter().map(|name| (*name).to_owned()));
    session.start_workout().await;
}
