// ABOUTME: Muscle group enumeration used by the selection phase and workout naming
// ABOUTME: Stable lowercase keys are persisted; display labels come from the localizer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Muscle groups a user can target in the setup phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    /// Pectorals
    Chest,
    /// Lats, traps, rhomboids
    Back,
    /// Deltoids
    Shoulders,
    /// Biceps and forearm flexors
    Biceps,
    /// Triceps
    Triceps,
    /// Quads and hamstrings
    Legs,
    /// Glutes and hip extensors
    Glutes,
    /// Abs and obliques
    Core,
    /// Gastrocnemius and soleus
    Calves,
    /// Conditioning work
    Cardio,
}

impl MuscleGroup {
    /// Every group in display order
    pub const ALL: [Self; 10] = [
        Self::Chest,
        Self::Back,
        Self::Shoulders,
        Self::Biceps,
        Self::Triceps,
        Self::Legs,
        Self::Glutes,
        Self::Core,
        Self::Calves,
        Self::Cardio,
    ];

    /// Stable storage key
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Shoulders => "shoulders",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Legs => "legs",
            Self::Glutes => "glutes",
            Self::Core => "core",
            Self::Calves => "calves",
            Self::Cardio => "cardio",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MuscleGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|group| group.key() == wanted)
            .ok_or_else(|| format!("unknown muscle group '{wanted}'"))
    }
}
