// ABOUTME: Static exercise catalog keyed by muscle group for the selection phase
// ABOUTME: Exercise names double as history keys, so they must stay stable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use liftlog_core::models::MuscleGroup;

/// Catalog exercises for a muscle group
#[must_use]
pub const fn exercises_for(group: MuscleGroup) -> &'static [&'static str] {
    match group {
        MuscleGroup::Chest => &[
            "Bench Press",
            "Incline Dumbbell Press",
            "Cable Fly",
            "Push-Up",
            "Dips",
        ],
        MuscleGroup::Back => &[
            "Deadlift",
            "Pull-Up",
            "Barbell Row",
            "Lat Pulldown",
            "Seated Cable Row",
        ],
        MuscleGroup::Shoulders => &[
            "Overhead Press",
            "Lateral Raise",
            "Rear Delt Fly",
            "Arnold Press",
        ],
        MuscleGroup::Biceps => &["Barbell Curl", "Hammer Curl", "Preacher Curl"],
        MuscleGroup::Triceps => &[
            "Triceps Pushdown",
            "Skull Crusher",
            "Overhead Triceps Extension",
        ],
        MuscleGroup::Legs => &[
            "Back Squat",
            "Front Squat",
            "Leg Press",
            "Romanian Deadlift",
            "Walking Lunge",
            "Leg Curl",
        ],
        MuscleGroup::Glutes => &["Hip Thrust", "Glute Bridge", "Bulgarian Split Squat"],
        MuscleGroup::Core => &["Plank", "Hanging Leg Raise", "Cable Crunch"],
        MuscleGroup::Calves => &["Standing Calf Raise", "Seated Calf Raise"],
        MuscleGroup::Cardio => &["Rowing Machine", "Treadmill Run", "Assault Bike"],
    }
}

/// Catalog exercises for several groups, de-duplicated, in group order
#[must_use]
pub fn exercises_for_all(groups: &[MuscleGroup]) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Vec::new();
    for group in groups {
        for name in exercises_for(*group) {
            if !names.contains(name) {
                names.push(*name);
            }
        }
    }
    names
}

/// Whether an exercise name exists in the catalog (case-insensitive)
#[must_use]
pub fn is_known(name: &str) -> bool {
    canonical_name(name).is_some()
}

/// Catalog spelling of an exercise name (case-insensitive lookup)
#[must_use]
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let wanted = name.trim();
    MuscleGroup::ALL
        .iter()
        .flat_map(|group| exercises_for(*group).iter())
        .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
        .copied()
}
