// ABOUTME: Fire-and-forget audio and haptic feedback triggered by timers and set logging
// ABOUTME: The core issues these calls but never awaits or branches on their outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Haptic pulse intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticPulse {
    /// Selection changes
    Light,
    /// Set completion
    Medium,
    /// Destructive actions
    Heavy,
    /// Workout saved
    Success,
}

/// Sink for user feedback side effects
pub trait FeedbackSink: Send + Sync {
    /// Audio cue for a finished countdown or rest timer
    fn completion_cue(&self);

    /// Haptic pulse
    fn haptic(&self, pulse: HapticPulse);
}

/// Logs feedback events instead of producing them
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFeedback;

impl FeedbackSink for TracingFeedback {
    fn completion_cue(&self) {
        debug!(feedback.kind = "audio", "Completion cue");
    }

    fn haptic(&self, pulse: HapticPulse) {
        debug!(feedback.kind = "haptic", feedback.pulse = ?pulse, "Haptic pulse");
    }
}

/// Rings the terminal bell on completion; haptics are logged
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl FeedbackSink for TerminalBell {
    fn completion_cue(&self) {
        let mut stdout = io::stdout();
        // Bell failures are irrelevant to the timer
        let _ = stdout.write_all(b"\x07");
        let _ = stdout.flush();
    }

    fn haptic(&self, pulse: HapticPulse) {
        TracingFeedback.haptic(pulse);
    }
}

/// Discards all feedback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFeedback;

impl FeedbackSink for NoopFeedback {
    fn completion_cue(&self) {}

    fn haptic(&self, _pulse: HapticPulse) {}
}
