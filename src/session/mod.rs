// ABOUTME: Session orchestrator driving setup, selection, active and summary phases
// ABOUTME: Persists selections and set data on every change and resumes them after a restart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Workout Session
//!
//! [`WorkoutSession`] owns the workflow phase and everything the user has chosen
//! or typed so far. It consumes the [`ClockEngine`](crate::clock::ClockEngine)
//! for workout duration and rest intervals and the [`HistoryTracker`] for
//! records and suggestions.
//!
//! Two guards run after every state change and after a reload:
//!
//! - `active` with no exercises falls back to `selection`;
//! - `summary` with no completed workout in memory falls back to `setup`.
//!
//! Finishing a workout is the single commit point: the completed workout becomes
//! the in-memory summary even when writing it to the record store fails.

mod editing;
mod templates;

use std::sync::Arc;

use chrono::Utc;
use liftlog_core::constants::session_keys;
use liftlog_core::models::{ActiveExercise, CompletedWorkout, MuscleGroup, SessionPhase};
use liftlog_intelligence::{total_volume, WorkoutStats};
use tracing::{debug, info};
use uuid::Uuid;

use crate::clock::{ClockEngine, SharedClock};
use crate::config::TrackerConfig;
use crate::errors::AppResult;
use crate::feedback::{FeedbackSink, HapticPulse, TracingFeedback};
use crate::history::HistoryTracker;
use crate::i18n::Localizer;
use crate::logging::AppLogger;
use crate::store::{KeyValueStore, KeyValueStoreExt, Partition, RecordStore, RecordStoreExt, Stores};

/// Collaborators a session is built from
pub struct SessionContext {
    /// Key-value store for session-scoped state
    pub kv: Arc<dyn KeyValueStore>,
    /// Record store for completed workouts and templates
    pub records: Arc<dyn RecordStore>,
    /// Shared clock engine
    pub clock: SharedClock,
    /// Exercise history
    pub history: HistoryTracker,
    /// Audio and haptic feedback
    pub feedback: Arc<dyn FeedbackSink>,
    /// Label lookup
    pub localizer: Localizer,
    /// Rest interval started when a set is completed
    pub rest_seconds: u32,
}

/// Guided workout workflow with write-through persistence
pub struct WorkoutSession {
    kv: Arc<dyn KeyValueStore>,
    records: Arc<dyn RecordStore>,
    clock: SharedClock,
    history: HistoryTracker,
    feedback: Arc<dyn FeedbackSink>,
    localizer: Localizer,
    rest_seconds: u32,

    phase: SessionPhase,
    direction: i8,
    muscles: Vec<MuscleGroup>,
    selected_exercises: Vec<String>,
    active_exercises: Vec<ActiveExercise>,
    completed_workout: Option<CompletedWorkout>,
    workout_history: Vec<CompletedWorkout>,
}

impl WorkoutSession {
    /// Open the configured stores and resume whatever session they hold
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend cannot be initialized or the
    /// completed-workout partition cannot be read
    pub async fn open(config: &TrackerConfig) -> AppResult<Self> {
        Self::open_with_feedback(config, Arc::new(TracingFeedback)).await
    }

    /// Like [`open`](Self::open), with a specific feedback sink
    ///
    /// # Errors
    ///
    /// Returns an error if the store backend cannot be initialized or the
    /// completed-workout partition cannot be read
    pub async fn open_with_feedback(
        config: &TrackerConfig,
        feedback: Arc<dyn FeedbackSink>,
    ) -> AppResult<Self> {
        let stores = Stores::from_config(config)?;
        Self::restore(SessionContext {
            clock: ClockEngine::load(stores.kv.clone(), feedback.clone()).into_shared(),
            history: HistoryTracker::load(stores.kv.clone(), config.overload.policy()),
            kv: stores.kv,
            records: stores.records,
            feedback,
            localizer: Localizer::new(config.language),
            rest_seconds: config.rest_seconds,
        })
        .await
    }

    /// Rebuild a session from its collaborators' persisted state
    ///
    /// # Errors
    ///
    /// Returns an error if the completed-workout partition cannot be read
    pub async fn restore(context: SessionContext) -> AppResult<Self> {
        let SessionContext {
            kv,
            records,
            clock,
            history,
            feedback,
            localizer,
            rest_seconds,
        } = context;

        let mut workout_history: Vec<CompletedWorkout> =
            records.list_json(Partition::Workouts).await?;
        workout_history.sort_by(|a, b| b.completed_at.cmp(&a.completed_at));

        let mut session = Self {
            phase: kv.get_parsed_or(session_keys::PHASE, SessionPhase::default()),
            direction: 0,
            muscles: kv.get_parsed_or(session_keys::MUSCLES, Vec::new()),
            selected_exercises: kv.get_parsed_or(session_keys::SELECTED_EXERCISES, Vec::new()),
            active_exercises: kv.get_parsed_or(session_keys::ACTIVE_EXERCISES, Vec::new()),
            completed_workout: None,
            workout_history,
            kv,
            records,
            clock,
            history,
            feedback,
            localizer,
            rest_seconds,
        };
        info!(
            session.phase = %session.phase,
            session.exercises = session.active_exercises.len(),
            session.history = session.workout_history.len(),
            "Session restored"
        );
        session.enforce_guards();
        Ok(session)
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Direction of the last transition: 1 forward, -1 back, 0 none
    #[must_use]
    pub const fn direction(&self) -> i8 {
        self.direction
    }

    /// Selected muscle groups
    #[must_use]
    pub fn muscles(&self) -> &[MuscleGroup] {
        &self.muscles
    }

    /// Selected exercise names in order
    #[must_use]
    pub fn selected_exercises(&self) -> &[String] {
        &self.selected_exercises
    }

    /// In-progress exercises with their sets
    #[must_use]
    pub fn active_exercises(&self) -> &[ActiveExercise] {
        &self.active_exercises
    }

    /// The workout shown in the summary phase
    #[must_use]
    pub const fn completed_workout(&self) -> Option<&CompletedWorkout> {
        self.completed_workout.as_ref()
    }

    /// Completed workouts, newest first
    #[must_use]
    pub fn workout_history(&self) -> &[CompletedWorkout] {
        &self.workout_history
    }

    /// Aggregate statistics over the workout history
    #[must_use]
    pub fn stats(&self) -> WorkoutStats {
        WorkoutStats::from_workouts(&self.workout_history)
    }

    /// Exercise history tracker
    #[must_use]
    pub const fn history(&self) -> &HistoryTracker {
        &self.history
    }

    /// Mutable exercise history tracker
    pub fn history_mut(&mut self) -> &mut HistoryTracker {
        &mut self.history
    }

    /// Shared clock engine handle
    #[must_use]
    pub fn clock(&self) -> SharedClock {
        self.clock.clone()
    }

    /// Label lookup in use
    #[must_use]
    pub const fn localizer(&self) -> Localizer {
        self.localizer
    }

    /// Move to `phase`, then let the guards correct it if needed
    pub fn set_phase(&mut self, phase: SessionPhase) {
        self.transition(phase, "requested", true);
        self.enforce_guards();
    }

    /// `setup → selection`; requires at least one muscle group
    pub fn proceed_to_selection(&mut self) -> bool {
        if self.phase != SessionPhase::Setup || self.muscles.is_empty() {
            return false;
        }
        self.transition(SessionPhase::Selection, "muscles chosen", true);
        true
    }

    /// Step back one phase
    ///
    /// Leaving `active` pauses the workout clock; leaving `summary` resets the session.
    pub async fn go_back(&mut self) {
        match self.phase {
            SessionPhase::Setup => {}
            SessionPhase::Selection => {
                self.transition(SessionPhase::Setup, "back", true);
            }
            SessionPhase::Active => {
                self.clock.lock().await.pause_workout_clock();
                self.transition(SessionPhase::Selection, "back", true);
            }
            SessionPhase::Summary => self.reset_session().await,
        }
    }

    /// Replace the selected muscle groups, dropping duplicates
    pub fn set_muscles(&mut self, muscles: impl IntoIterator<Item = MuscleGroup>) {
        let mut unique = Vec::new();
        for group in muscles {
            if !unique.contains(&group) {
                unique.push(group);
            }
        }
        self.muscles = unique;
        self.save_muscles();
    }

    /// Add or remove one muscle group
    pub fn toggle_muscle(&mut self, group: MuscleGroup) {
        if let Some(index) = self.muscles.iter().position(|m| *m == group) {
            self.muscles.remove(index);
        } else {
            self.muscles.push(group);
        }
        self.save_muscles();
    }

    /// Replace the selected exercises, dropping duplicates and blanks
    pub fn set_selected_exercises(&mut self, names: impl IntoIterator<Item = String>) {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.trim().to_owned();
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }
        self.selected_exercises = unique;
        self.save_selected();
    }

    /// Add or remove one exercise from the selection
    pub fn toggle_exercise(&mut self, name: &str) {
        if let Some(index) = self.selected_exercises.iter().position(|n| n == name) {
            self.selected_exercises.remove(index);
        } else if !name.trim().is_empty() {
            self.selected_exercises.push(name.trim().to_owned());
        }
        self.save_selected();
    }

    /// `selection → active`
    ///
    /// Existing entries for still-selected exercises keep their sets; new ones
    /// start with a single empty set. The workout clock starts fresh only when it
    /// is at zero and idle, otherwise it resumes.
    pub async fn start_workout(&mut self) {
        if self.selected_exercises.is_empty() {
            debug!("Ignoring start without selected exercises");
            return;
        }

        let mut previous = std::mem::take(&mut self.active_exercises);
        self.active_exercises = self
            .selected_exercises
            .iter()
            .map(|name| {
                previous
                    .iter()
                    .position(|exercise| exercise.name == *name)
                    .map_or_else(
                        || ActiveExercise::fresh(name.clone()),
                        |index| previous.swap_remove(index),
                    )
            })
            .collect();
        self.save_active();

        let fresh = self.clock.lock().await.start_workout_clock();
        self.transition(
            SessionPhase::Active,
            if fresh { "workout started" } else { "workout resumed" },
            true,
        );
    }

    /// `active → summary`, committing the workout
    ///
    /// Returns the completed workout, or `None` when there was no active workout.
    pub async fn finish_workout(&mut self) -> Option<&CompletedWorkout> {
        if self.phase != SessionPhase::Active || self.active_exercises.is_empty() {
            return None;
        }

        let duration_seconds = {
            let mut clock = self.clock.lock().await;
            clock.pause_workout_clock();
            clock.stop_rest_timer();
            clock.workout_elapsed()
        };

        let completed_at = Utc::now();
        let exercises = std::mem::take(&mut self.active_exercises);
        let workout = CompletedWorkout {
            id: Uuid::new_v4(),
            date: completed_at.format("%Y-%m-%d %H:%M").to_string(),
            completed_at,
            name: Some(self.localizer.workout_name(&self.muscles)),
            duration_seconds,
            total_volume: total_volume(&exercises),
            exercises,
        };

        if let Err(e) = self
            .records
            .put_json(Partition::Workouts, &workout.id.to_string(), &workout)
            .await
        {
            AppLogger::log_store_failure("write", "workouts", &e);
        }
        self.history.update_history(&workout);
        self.workout_history.insert(0, workout.clone());

        self.clear_session_state();
        self.clock.lock().await.reset_workout_clock();

        AppLogger::log_workout_completed(
            &workout.id.to_string(),
            workout.exercises.len(),
            workout.total_volume,
            workout.duration_seconds,
        );
        self.completed_workout = Some(workout);
        self.transition(SessionPhase::Summary, "workout finished", false);
        self.feedback.haptic(HapticPulse::Success);
        self.completed_workout.as_ref()
    }

    /// Flip a set's completed flag, returning the new value
    ///
    /// Completing a set starts the rest timer unless one is already running;
    /// un-completing stops it. Indices that no longer exist are ignored.
    pub async fn toggle_set_complete(
        &mut self,
        exercise_index: usize,
        set_index: usize,
    ) -> Option<bool> {
        let set = self
            .active_exercises
            .get_mut(exercise_index)
            .and_then(|exercise| exercise.sets.get_mut(set_index))?;
        set.completed = !set.completed;
        let completed = set.completed;
        self.save_active();

        let mut clock = self.clock.lock().await;
        if completed {
            if clock.rest_remaining().is_none() {
                clock.start_rest_timer(u64::from(self.rest_seconds));
            }
            self.feedback.haptic(HapticPulse::Medium);
        } else {
            clock.stop_rest_timer();
        }
        Some(completed)
    }

    /// Abandon everything session-scoped and return to `setup`
    pub async fn reset_session(&mut self) {
        self.clear_session_state();
        self.completed_workout = None;
        {
            let mut clock = self.clock.lock().await;
            clock.reset_workout_clock();
            clock.stop_rest_timer();
        }
        self.transition(SessionPhase::Setup, "reset", false);
    }

    /// Delete a completed workout, returning whether it existed
    pub async fn delete_workout(&mut self, id: Uuid) -> bool {
        let Some(index) = self.workout_history.iter().position(|w| w.id == id) else {
            return false;
        };
        self.workout_history.remove(index);
        if let Err(e) = self
            .records
            .delete_record(Partition::Workouts, &id.to_string())
            .await
        {
            AppLogger::log_store_failure("delete", "workouts", &e);
        }
        true
    }

    /// Merge completed workouts by id into the history (backup restore)
    ///
    /// # Errors
    ///
    /// Returns an error if a workout cannot be written to the record store
    pub async fn import_workouts(&mut self, workouts: Vec<CompletedWorkout>) -> AppResult<usize> {
        let mut added = 0;
        for workout in workouts {
            self.records
                .put_json(Partition::Workouts, &workout.id.to_string(), &workout)
                .await?;
            if let Some(index) = self.workout_history.iter().position(|w| w.id == workout.id) {
                self.workout_history[index] = workout;
            } else {
                self.workout_history.push(workout);
                added += 1;
            }
        }
        self.workout_history
            .sort_by(|a, b| b.completed_at.cmp(&a.completed_at));
        Ok(added)
    }

    pub(crate) fn records(&self) -> &Arc<dyn RecordStore> {
        &self.records
    }

    fn transition(&mut self, next: SessionPhase, reason: &str, persist: bool) {
        if next == self.phase {
            return;
        }
        AppLogger::log_phase_transition(self.phase, next, reason);
        self.direction = self.phase.direction_to(next);
        self.phase = next;
        if persist {
            self.kv.persist(session_keys::PHASE, &next);
        }
    }

    /// Correct phases that cannot be displayed meaningfully
    fn enforce_guards(&mut self) {
        if self.phase == SessionPhase::Active && self.active_exercises.is_empty() {
            self.transition(SessionPhase::Selection, "no active exercises", true);
        }
        if self.phase == SessionPhase::Summary && self.completed_workout.is_none() {
            self.transition(SessionPhase::Setup, "no completed workout", true);
        }
    }

    fn clear_session_state(&mut self) {
        for key in session_keys::SESSION_SCOPED {
            self.kv.forget(key);
        }
        self.muscles.clear();
        self.selected_exercises.clear();
        self.active_exercises.clear();
    }

    fn save_muscles(&self) {
        self.kv.persist(session_keys::MUSCLES, &self.muscles);
    }

    fn save_selected(&self) {
        self.kv
            .persist(session_keys::SELECTED_EXERCISES, &self.selected_exercises);
    }

    fn save_active(&self) {
        self.kv
            .persist(session_keys::ACTIVE_EXERCISES, &self.active_exercises);
    }
}

impl std::fmt::Debug for WorkoutSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkoutSession")
            .field("phase", &self.phase)
            .field("muscles", &self.muscles)
            .field("selected_exercises", &self.selected_exercises)
            .field("active_exercises", &self.active_exercises.len())
            .field("workout_history", &self.workout_history.len())
            .finish_non_exhaustive()
    }
}
