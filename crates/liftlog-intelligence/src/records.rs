// ABOUTME: Personal record merging as independent running maxima
// ABOUTME: Weight, reps, and single-set volume never decrease across updates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use liftlog_core::models::{PersonalRecord, WorkoutSet};

/// Fold a workout's completed sets into an existing record
///
/// Each field is maximized independently, so the heaviest set and the highest-rep
/// set may be different sets. Only completed sets count toward records.
#[must_use]
pub fn merge_personal_record(existing: PersonalRecord, sets: &[WorkoutSet]) -> PersonalRecord {
    sets.iter()
        .filter(|set| set.completed)
        .fold(existing, |record, set| PersonalRecord {
            max_weight: record.max_weight.max(set.weight),
            max_reps: record.max_reps.max(set.reps),
            max_volume: record.max_volume.max(set.volume()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn done(weight: f64, reps: u32) -> WorkoutSet {
        let mut set = WorkoutSet::with_target(weight, reps);
        set.completed = true;
        set
    }

    #[test]
    fn test_fields_are_maximized_independently() {
        let record = merge_personal_record(
            PersonalRecord::default(),
            &[done(100.0, 3), done(60.0, 15)],
        );
        assert!((record.max_weight - 100.0).abs() < f64::EPSILON);
        assert_eq!(record.max_reps, 15);
        assert!((record.max_volume - 900.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_records_never_decrease() {
        let first = merge_personal_record(PersonalRecord::default(), &[done(100.0, 5)]);
        let second = merge_personal_record(first, &[done(50.0, 2)]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_incomplete_sets_are_ignored() {
        let pending = WorkoutSet::with_target(200.0, 1);
        let record = merge_personal_record(PersonalRecord::default(), &[pending]);
        assert_eq!(record, PersonalRecord::default());
    }
}
