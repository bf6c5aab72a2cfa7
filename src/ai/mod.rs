// ABOUTME: Workout plan generation interface and prompt/response handling
// ABOUTME: Generators return a structured plan or None; callers never see failure reasons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

//! # AI Plan Generation
//!
//! A [`PlanGenerator`] turns a [`PlanRequest`] into a [`WorkoutPlan`]. Every failure
//! (missing credentials, network error, non-success status, malformed output) is
//! collapsed into `None`. One attempt is made per request; there is no retry.

/// Google Gemini generator
pub mod gemini;

pub use gemini::GeminiPlanGenerator;

use std::fmt::Write as _;

use async_trait::async_trait;
use liftlog_core::models::{PlanRequest, WorkoutPlan};
use tracing::warn;

use crate::i18n::{Language, Localizer};

/// Source of generated workout plans
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Generate a plan, or `None` on any failure
    async fn generate(&self, request: &PlanRequest) -> Option<WorkoutPlan>;
}

/// Instruction sent to the model for a plan request
#[must_use]
pub fn build_prompt(request: &PlanRequest) -> String {
    let localizer = Localizer::new(Language::En);
    let muscles = if request.muscles.is_empty() {
        "full body".to_owned()
    } else {
        request
            .muscles
            .iter()
            .map(|group| localizer.muscle(*group))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut prompt = format!(
        "Create a strength training workout for a {level:?} lifter targeting: {muscles}.\n",
        level = request.level,
    );
    if let Some(focus) = request.focus.as_deref().map(str::trim).filter(|f| !f.is_empty()) {
        let _ = writeln!(prompt, "Additional focus: {focus}");
    }
    prompt.push_str(
        "Respond with JSON only, matching this shape:\n\
         {\"title\": string, \"description\": string, \"estimatedDuration\": string, \
         \"exercises\": [{\"name\": string, \"sets\": integer, \"reps\": string, \"notes\": string}]}\n\
         Use 4 to 6 exercises.",
    );
    prompt
}

/// Parse model output into a plan, tolerating a Markdown code fence
#[must_use]
pub fn parse_plan(text: &str) -> Option<WorkoutPlan> {
    let body = strip_code_fence(text.trim());
    match serde_json::from_str::<WorkoutPlan>(body) {
        Ok(plan) if !plan.exercises.is_empty() => Some(plan),
        Ok(_) => {
            warn!("Generated plan contained no exercises");
            None
        }
        Err(e) => {
            warn!(error = %e, "Generated plan was not valid JSON");
            None
        }
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use liftlog_core::models::{ExperienceLevel, MuscleGroup};

    const PLAN_JSON: &str = r#"{
        "title": "Push Day",
        "description": "Chest and triceps",
        "estimatedDuration": "45 min",
        "exercises": [{"name": "Bench Press", "sets": 4, "reps": "6-8", "notes": "Pause at chest"}]
    }"#;

    #[test]
    fn test_parse_plan_accepts_fenced_json() {
        let fenced = format!("```json\n{PLAN_JSON}\n```");
        let plan = parse_plan(&fenced).unwrap();
        assert_eq!(plan.title, "Push Day");
        assert_eq!(plan.exercises[0].rep_target(), 6);
    }

    #[test]
    fn test_parse_plan_rejects_garbage_and_empty_plans() {
        assert!(parse_plan("Sorry, I can't help with that").is_none());
        assert!(parse_plan(
            r#"{"title":"x","description":"y","estimatedDuration":"z","exercises":[]}"#
        )
        .is_none());
    }

    #[test]
    fn test_prompt_mentions_muscles_and_focus() {
        let prompt = build_prompt(&PlanRequest {
            muscles: vec![MuscleGroup::Chest, MuscleGroup::Triceps],
            level: ExperienceLevel::Intermediate,
            focus: Some("explosive pressing".to_owned()),
        });
        assert!(prompt.contains("Chest, Triceps"));
        assert!(prompt.contains("Intermediate"));
        assert!(prompt.contains("explosive pressing"));
    }
}
