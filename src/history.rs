// ABOUTME: Exercise history tracker maintaining per-exercise records and overload suggestions
// ABOUTME: Records live under one store key as a name-keyed map, rewritten on every update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::sync::Arc;

use liftlog_core::constants::history_keys;
use liftlog_core::models::{CompletedWorkout, ExerciseHistory, PersonalRecord};
use liftlog_intelligence::{merge_personal_record, OverloadPolicy, OverloadSuggestion};
use tracing::debug;

use crate::store::{KeyValueStore, KeyValueStoreExt};

/// Per-exercise history keyed by exact exercise name
pub struct HistoryTracker {
    records: BTreeMap<String, ExerciseHistory>,
    policy: OverloadPolicy,
    kv: Arc<dyn KeyValueStore>,
}

impl HistoryTracker {
    /// Load history from the store; a malformed map reads as empty
    #[must_use]
    pub fn load(kv: Arc<dyn KeyValueStore>, policy: OverloadPolicy) -> Self {
        let records: BTreeMap<String, ExerciseHistory> =
            kv.get_parsed_or(history_keys::EXERCISE_HISTORY, BTreeMap::new());
        debug!(exercises = records.len(), "Exercise history loaded");
        Self {
            records,
            policy,
            kv,
        }
    }

    /// History for an exercise, if it was ever performed
    #[must_use]
    pub fn get_exercise_history(&self, name: &str) -> Option<&ExerciseHistory> {
        self.records.get(name)
    }

    /// Every record, ordered by exercise name
    pub fn all(&self) -> impl Iterator<Item = &ExerciseHistory> {
        self.records.values()
    }

    /// Number of exercises with history
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no exercise has history yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Overload policy in use
    #[must_use]
    pub const fn policy(&self) -> OverloadPolicy {
        self.policy
    }

    /// Upsert the record of every exercise in a completed workout
    ///
    /// Re-applying the same workout leaves records unchanged because personal
    /// records are running maxima.
    pub fn update_history(&mut self, workout: &CompletedWorkout) {
        let performed = workout.completed_at.date_naive();
        for exercise in &workout.exercises {
            let existing = self
                .records
                .get(&exercise.name)
                .map(|history| history.personal_record)
                .unwrap_or_default();

            self.records.insert(
                exercise.name.clone(),
                ExerciseHistory {
                    exercise_name: exercise.name.clone(),
                    last_performed: performed,
                    last_sets: exercise.sets.clone(),
                    personal_record: merge_personal_record(existing, &exercise.sets),
                },
            );
        }
        debug!(
            workout.id = %workout.id,
            exercises = workout.exercises.len(),
            "Exercise history updated"
        );
        self.save();
    }

    /// Suggested sets for the next session, or `None` without history
    #[must_use]
    pub fn get_progressive_overload_suggestion(&self, name: &str) -> Option<OverloadSuggestion> {
        self.records
            .get(name)
            .map(|history| self.policy.suggest(&history.last_sets))
    }

    /// Merge imported records
    ///
    /// Personal records take the maximum of both sides; the more recent
    /// `last_performed` decides which `last_sets` survive.
    pub fn merge(&mut self, records: impl IntoIterator<Item = ExerciseHistory>) {
        for incoming in records {
            match self.records.entry(incoming.exercise_name.clone()) {
                Entry::Occupied(mut entry) => {
                    let current = entry.get_mut();
                    current.personal_record =
                        max_record(current.personal_record, incoming.personal_record);
                    if incoming.last_performed >= current.last_performed {
                        current.last_performed = incoming.last_performed;
                        current.last_sets = incoming.last_sets;
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(incoming);
                }
            }
        }
        self.save();
    }

    fn save(&self) {
        self.kv.persist(history_keys::EXERCISE_HISTORY, &self.records);
    }
}

fn max_record(a: PersonalRecord, b: PersonalRecord) -> PersonalRecord {
    PersonalRecord {
        max_weight: a.max_weight.max(b.max_weight),
        max_reps: a.max_reps.max(b.max_reps),
        max_volume: a.max_volume.max(b.max_volume),
    }
}

impl std::fmt::Debug for HistoryTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryTracker")
            .field("exercises", &self.records.len())
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
