// ABOUTME: Set and exercise editing during an active workout
// ABOUTME: Covers add, update, remove, reorder, suggestion prefill and AI plan loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use liftlog_core::models::{ActiveExercise, SessionPhase, SetUpdate, WorkoutPlan, WorkoutSet};
use liftlog_intelligence::OverloadSuggestion;
use tracing::debug;

use super::WorkoutSession;
use crate::feedback::HapticPulse;

impl WorkoutSession {
    /// Append a set to an exercise, drafted from the previous set's weight and reps
    ///
    /// Returns the new set's index.
    pub fn add_set(&mut self, exercise_index: usize) -> Option<usize> {
        let exercise = self.active_exercises.get_mut(exercise_index)?;
        let draft = exercise.sets.last().map_or_else(WorkoutSet::empty, |last| {
            WorkoutSet::with_target(last.weight, last.reps)
        });
        exercise.sets.push(draft);
        let index = exercise.sets.len() - 1;
        self.save_active();
        Some(index)
    }

    /// Edit a set's fields; returns whether the set exists
    pub fn update_set(
        &mut self,
        exercise_index: usize,
        set_index: usize,
        update: &SetUpdate,
    ) -> bool {
        let Some(set) = self
            .active_exercises
            .get_mut(exercise_index)
            .and_then(|exercise| exercise.sets.get_mut(set_index))
        else {
            return false;
        };
        set.apply(update);
        self.save_active();
        true
    }

    /// Remove a set; returns whether it existed
    pub fn remove_set(&mut self, exercise_index: usize, set_index: usize) -> bool {
        let Some(exercise) = self.active_exercises.get_mut(exercise_index) else {
            return false;
        };
        if set_index >= exercise.sets.len() {
            return false;
        }
        exercise.sets.remove(set_index);
        self.save_active();
        self.feedback.haptic(HapticPulse::Heavy);
        true
    }

    /// Remove an exercise from the workout and the selection
    pub fn remove_exercise(&mut self, exercise_index: usize) -> Option<ActiveExercise> {
        if exercise_index >= self.active_exercises.len() {
            return None;
        }
        let removed = self.active_exercises.remove(exercise_index);
        self.selected_exercises.retain(|name| *name != removed.name);
        self.save_active();
        self.save_selected();
        self.feedback.haptic(HapticPulse::Heavy);
        self.enforce_guards();
        Some(removed)
    }

    /// Move an exercise to a new position (reorder mode)
    pub fn move_exercise(&mut self, from: usize, to: usize) -> bool {
        let len = self.active_exercises.len();
        if from >= len || to >= len {
            return false;
        }
        if from != to {
            let exercise = self.active_exercises.remove(from);
            self.active_exercises.insert(to, exercise);
            self.save_active();
            self.feedback.haptic(HapticPulse::Light);
        }
        true
    }

    /// Add an exercise mid-workout with one empty set; duplicates are ignored
    pub fn add_exercise(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.active_exercises.iter().any(|e| e.name == name) {
            return false;
        }
        self.active_exercises.push(ActiveExercise::fresh(name));
        if !self.selected_exercises.iter().any(|n| n == name) {
            self.selected_exercises.push(name.to_owned());
            self.save_selected();
        }
        self.save_active();
        true
    }

    /// Overload suggestion for an exercise, from its history
    #[must_use]
    pub fn suggestion_for(&self, name: &str) -> Option<OverloadSuggestion> {
        self.history.get_progressive_overload_suggestion(name)
    }

    /// Prefill an exercise's untouched sets from a suggestion
    ///
    /// Suggestions usually arrive after an async lookup; if the exercise was removed
    /// in the meantime the suggestion is dropped and `false` returned.
    pub fn apply_suggestion(&mut self, name: &str, suggestion: &OverloadSuggestion) -> bool {
        let Some(exercise) = self.active_exercises.iter_mut().find(|e| e.name == name) else {
            debug!(exercise = %name, "Dropping suggestion for removed exercise");
            return false;
        };

        for (index, target) in suggestion.suggested_sets.iter().enumerate() {
            match exercise.sets.get_mut(index) {
                Some(set) if set.is_untouched() => {
                    set.weight = target.weight;
                    set.reps = target.reps;
                }
                Some(_) => {}
                None => exercise
                    .sets
                    .push(WorkoutSet::with_target(target.weight, target.reps)),
            }
        }
        self.save_active();
        true
    }

    /// Load a generated plan into the selection
    ///
    /// Each planned exercise becomes a selected exercise whose pending entry holds
    /// `sets` incomplete sets at the plan's rep target.
    pub fn apply_plan(&mut self, plan: &WorkoutPlan) {
        let mut exercises: Vec<ActiveExercise> = Vec::with_capacity(plan.exercises.len());
        for planned in &plan.exercises {
            let name = planned.name.trim();
            if name.is_empty() || exercises.iter().any(|e| e.name == name) {
                continue;
            }
            let reps = planned.rep_target();
            exercises.push(ActiveExercise {
                name: name.to_owned(),
                sets: (0..planned.sets.max(1))
                    .map(|_| WorkoutSet::with_target(0.0, reps))
                    .collect(),
            });
        }

        self.selected_exercises = exercises.iter().map(|e| e.name.clone()).collect();
        self.active_exercises = exercises;
        self.save_selected();
        self.save_active();

        if self.phase == SessionPhase::Setup {
            self.transition(SessionPhase::Selection, "plan loaded", true);
        }
        debug!(plan = %plan.title, exercises = self.selected_exercises.len(), "Plan applied");
    }
}
