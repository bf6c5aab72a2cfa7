// ABOUTME: Clock mode enumeration shared by the clock engine and its persisted state
// ABOUTME: Stopwatch counts up, timer counts down from a user-entered duration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primary clock mode
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockMode {
    /// Count elapsed seconds upward; laps allowed
    #[default]
    Stopwatch,
    /// Count a countdown to zero
    Timer,
}

impl ClockMode {
    /// Stable string form used in storage and the CLI
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stopwatch => "stopwatch",
            Self::Timer => "timer",
        }
    }
}

impl fmt::Display for ClockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClockMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stopwatch" => Ok(Self::Stopwatch),
            "timer" | "countdown" => Ok(Self::Timer),
            other => Err(format!("unknown clock mode '{other}'")),
        }
    }
}
