// ABOUTME: Progressive overload policy deriving the next session's sets from the last performance
// ABOUTME: Keeps set count, never lowers weight or reps, and always raises one of them per set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # Progressive Overload
//!
//! The policy is deliberately simple and monotonic:
//!
//! 1. If every previous set was completed at the same rep count, each loaded set
//!    keeps its reps and gains `weight_increment` kilograms.
//! 2. Otherwise each set gains one rep, unless it already sits at or above the
//!    `rep_ceiling`, in which case it gains weight instead.
//! 3. Unloaded sets (bodyweight, weight 0) always progress by one rep.
//!
//! The output has exactly as many sets as the input and every suggested set starts
//! incomplete.

use liftlog_core::constants::training::{DEFAULT_REP_CEILING, DEFAULT_WEIGHT_INCREMENT_KG};
use liftlog_core::models::WorkoutSet;
use serde::{Deserialize, Serialize};

/// One suggested set for the next session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestedSet {
    /// Target weight
    pub weight: f64,
    /// Target reps
    pub reps: u32,
    /// Always false; suggestions are targets, not performances
    pub completed: bool,
}

/// Which lever the policy pulled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverloadStrategy {
    /// Every set gained weight
    IncreaseWeight,
    /// Every set gained a rep
    IncreaseReps,
    /// Some sets gained weight, others reps
    Mixed,
    /// There was nothing to progress
    Unchanged,
}

/// Suggested set scheme for an exercise's next session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverloadSuggestion {
    /// Same length and order as the previous session's sets
    pub suggested_sets: Vec<SuggestedSet>,
    /// Lever used
    pub strategy: OverloadStrategy,
}

impl OverloadSuggestion {
    /// Materialize the suggestion as fresh, incomplete workout sets
    #[must_use]
    pub fn to_workout_sets(&self) -> Vec<WorkoutSet> {
        self.suggested_sets
            .iter()
            .map(|set| WorkoutSet::with_target(set.weight, set.reps))
            .collect()
    }
}

/// Tunable progressive overload policy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverloadPolicy {
    /// Kilograms added when progressing by weight
    pub weight_increment: f64,
    /// Rep count at which progression switches to weight
    pub rep_ceiling: u32,
}

impl Default for OverloadPolicy {
    fn default() -> Self {
        Self {
            weight_increment: DEFAULT_WEIGHT_INCREMENT_KG,
            rep_ceiling: DEFAULT_REP_CEILING,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Lever {
    Weight,
    Reps,
}

impl OverloadPolicy {
    /// Create a policy, falling back to defaults for non-positive values
    #[must_use]
    pub fn new(weight_increment: f64, rep_ceiling: u32) -> Self {
        let defaults = Self::default();
        Self {
            weight_increment: if weight_increment.is_finite() && weight_increment > 0.0 {
                weight_increment
            } else {
                defaults.weight_increment
            },
            rep_ceiling: if rep_ceiling == 0 {
                defaults.rep_ceiling
            } else {
                rep_ceiling
            },
        }
    }

    /// Derive the next session's sets from the previous session's sets
    #[must_use]
    pub fn suggest(&self, last_sets: &[WorkoutSet]) -> OverloadSuggestion {
        let steady = Self::held_steady(last_sets);

        let (suggested_sets, levers): (Vec<SuggestedSet>, Vec<Lever>) = last_sets
            .iter()
            .map(|set| self.progress(set, steady))
            .unzip();

        let strategy = if levers.is_empty() {
            OverloadStrategy::Unchanged
        } else if levers.iter().all(|lever| *lever == Lever::Weight) {
            OverloadStrategy::IncreaseWeight
        } else if levers.iter().all(|lever| *lever == Lever::Reps) {
            OverloadStrategy::IncreaseReps
        } else {
            OverloadStrategy::Mixed
        };

        OverloadSuggestion {
            suggested_sets,
            strategy,
        }
    }

    /// All sets completed at one shared, non-zero rep count
    fn held_steady(sets: &[WorkoutSet]) -> bool {
        let Some(first) = sets.first() else {
            return false;
        };
        first.reps > 0 && sets.iter().all(|set| set.completed && set.reps == first.reps)
    }

    fn progress(&self, set: &WorkoutSet, steady: bool) -> (SuggestedSet, Lever) {
        let loaded = set.weight > 0.0;
        if loaded && (steady || set.reps >= self.rep_ceiling) {
            (
                SuggestedSet {
                    weight: set.weight + self.weight_increment,
                    reps: set.reps,
                    completed: false,
                },
                Lever::Weight,
            )
        } else {
            (
                SuggestedSet {
                    weight: set.weight,
                    reps: set.reps.saturating_add(1),
                    completed: false,
                },
                Lever::Reps,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(weight: f64, reps: u32, completed: bool) -> WorkoutSet {
        let mut set = WorkoutSet::with_target(weight, reps);
        set.completed = completed;
        set
    }

    #[test]
    fn test_steady_completed_sets_gain_weight() {
        let suggestion =
            OverloadPolicy::default().suggest(&[set(80.0, 8, true), set(80.0, 8, true)]);

        assert_eq!(suggestion.suggested_sets.len(), 2);
        assert_eq!(suggestion.strategy, OverloadStrategy::IncreaseWeight);
        for suggested in &suggestion.suggested_sets {
            assert!((suggested.weight - 82.5).abs() < f64::EPSILON);
            assert_eq!(suggested.reps, 8);
            assert!(!suggested.completed);
        }
    }

    #[test]
    fn test_uneven_sets_gain_reps() {
        let suggestion =
            OverloadPolicy::default().suggest(&[set(80.0, 8, true), set(80.0, 6, true)]);
        assert_eq!(suggestion.strategy, OverloadStrategy::IncreaseReps);
        assert_eq!(suggestion.suggested_sets[0].reps, 9);
        assert_eq!(suggestion.suggested_sets[1].reps, 7);
    }

    #[test]
    fn test_rep_ceiling_switches_to_weight() {
        let suggestion =
            OverloadPolicy::new(5.0, 12).suggest(&[set(40.0, 12, true), set(40.0, 10, false)]);
        assert_eq!(suggestion.strategy, OverloadStrategy::Mixed);
        assert!((suggestion.suggested_sets[0].weight - 45.0).abs() < f64::EPSILON);
        assert_eq!(suggestion.suggested_sets[1].reps, 11);
    }

    #[test]
    fn test_bodyweight_sets_gain_reps_even_when_steady() {
        let suggestion = OverloadPolicy::default().suggest(&[set(0.0, 10, true)]);
        assert_eq!(suggestion.suggested_sets[0].reps, 11);
        assert!(suggestion.suggested_sets[0].weight.abs() < f64::EPSILON);
    }

    #[test]
    fn test_every_suggested_set_is_monotonic_and_strictly_progressed() {
        let last = [
            set(100.0, 5, true),
            set(95.0, 6, false),
            set(0.0, 0, false),
            set(20.0, 15, true),
        ];
        let suggestion = OverloadPolicy::default().suggest(&last);

        assert_eq!(suggestion.suggested_sets.len(), last.len());
        for (previous, next) in last.iter().zip(&suggestion.suggested_sets) {
            assert!(next.weight >= previous.weight);
            assert!(next.reps >= previous.reps);
            assert!(next.weight > previous.weight || next.reps > previous.reps);
        }
    }

    #[test]
    fn test_empty_history_yields_empty_suggestion() {
        let suggestion = OverloadPolicy::default().suggest(&[]);
        assert!(suggestion.suggested_sets.is_empty());
        assert_eq!(suggestion.strategy, OverloadStrategy::Unchanged);
    }

    #[test]
    fn test_invalid_policy_values_fall_back_to_defaults() {
        let policy = OverloadPolicy::new(-1.0, 0);
        assert_eq!(policy, OverloadPolicy::default());
    }

    #[test]
    fn test_materialized_sets_are_incomplete() {
        let suggestion = OverloadPolicy::default().suggest(&[set(60.0, 10, true)]);
        let sets = suggestion.to_workout_sets();
        assert_eq!(sets.len(), 1);
        assert!(!sets[0].completed);
        assert_eq!(sets[0].reps, 10);
    }
}
