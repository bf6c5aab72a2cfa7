// ABOUTME: Guided workout workflow phases with fixed linear ordering
// ABOUTME: Transition direction is the sign of the phase index difference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// One stage of the guided workout-logging workflow
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionPhase {
    /// Choosing muscle groups
    #[default]
    Setup,
    /// Choosing exercises
    Selection,
    /// Logging sets
    Active,
    /// Reviewing the finished workout
    Summary,
}

impl SessionPhase {
    /// Position in the linear workflow
    #[must_use]
    pub const fn index(&self) -> u8 {
        match self {
            Self::Setup => 0,
            Self::Selection => 1,
            Self::Active => 2,
            Self::Summary => 3,
        }
    }

    /// Direction hint for moving from `self` to `next`: 1 forward, -1 back, 0 none
    #[must_use]
    pub fn direction_to(&self, next: Self) -> i8 {
        match next.index().cmp(&self.index()) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Setup => "setup",
            Self::Selection => "selection",
            Self::Active => "active",
            Self::Summary => "summary",
        };
        f.write_str(label)
    }
}
