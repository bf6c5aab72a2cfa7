// ABOUTME: Data commands for the liftlog CLI: history, suggestions, plans, templates and backups
// ABOUTME: Reads and writes through the session so every change is persisted the same way
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use liftlog::ai::{GeminiPlanGenerator, PlanGenerator};
use liftlog::backup;
use liftlog::config::TrackerConfig;
use liftlog::models::{ExperienceLevel, MuscleGroup, PlanRequest};
use liftlog::session::WorkoutSession;
use liftlog_intelligence::current_streak_days;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::{display_plan, display_stats, display_suggestion, display_workout};

/// Recent workouts plus aggregate statistics
pub fn history(session: &WorkoutSession, limit: usize) {
    let workouts = session.workout_history();
    if workouts.is_empty() {
        println!("No workouts yet");
        return;
    }
    for workout in workouts.iter().take(limit) {
        display_workout(workout);
    }
    if workouts.len() > limit {
        println!("... and {} more", workouts.len() - limit);
    }
    let streak = current_streak_days(workouts, Utc::now().date_naive());
    display_stats(&session.stats(), streak);
}

/// Delete one completed workout by id
pub async fn delete_workout(session: &mut WorkoutSession, id: Uuid) -> Result<()> {
    if !session.delete_workout(id).await {
        bail!("No workout with id {id}");
    }
    println!("Workout {id} deleted");
    Ok(())
}

/// Show the next-session suggestion, optionally prefilling the active workout
pub fn suggest(session: &mut WorkoutSession, exercise: &str, apply: bool) {
    let exercise = liftlog::catalog::canonical_name(exercise).unwrap_or(exercise);
    let Some(suggestion) = session.suggestion_for(exercise) else {
        println!("No history for {exercise} yet");
        return;
    };
    display_suggestion(exercise, &suggestion);

    if let Some(record) = session.history().get_exercise_history(exercise) {
        println!(
            "Personal bests: {} kg, {} reps, {:.1} kg in one set",
            record.personal_record.max_weight,
            record.personal_record.max_reps,
            record.personal_record.max_volume
        );
    }

    if apply {
        if session.apply_suggestion(exercise, &suggestion) {
            println!("Suggestion applied to {exercise}");
        } else {
            println!("{exercise} is not part of the active workout; nothing applied");
        }
    }
}

/// Ask the configured AI service for a plan
pub async fn generate(
    session: &mut WorkoutSession,
    config: &TrackerConfig,
    muscles: Vec<MuscleGroup>,
    level: ExperienceLevel,
    focus: Option<String>,
    apply: bool,
) -> Result<()> {
    let generator = GeminiPlanGenerator::from_config(&config.ai)
        .context("Plan generation needs an API key (set GEMINI_API_KEY)")?;
    let muscles = if muscles.is_empty() {
        session.muscles().to_vec()
    } else {
        muscles
    };
    let request = PlanRequest {
        muscles,
        level,
        focus,
    };

    println!("Generating plan...");
    let Some(plan) = generator.generate(&request).await else {
        println!("Could not generate a plan right now; try again later");
        return Ok(());
    };
    display_plan(&plan);

    if apply {
        session.apply_plan(&plan);
        info!(title = %plan.title, "Generated plan applied");
        println!("Plan loaded; run `liftlog start` to begin");
    }
    Ok(())
}

/// Save the current selection as a template
pub async fn save_template(session: &WorkoutSession, name: &str) -> Result<()> {
    let template = session.save_template(name).await?;
    println!("Saved template '{}' ({})", template.name, template.id);
    Ok(())
}

/// List saved templates, newest first
pub async fn list_templates(session: &WorkoutSession) -> Result<()> {
    let templates = session.templates().await?;
    if templates.is_empty() {
        println!("No templates saved");
    }
    for template in templates {
        println!("{}  {}", template.id, template.name);
        println!("   {}", template.exercises.join(", "));
    }
    Ok(())
}

/// Load a template into the selection
pub async fn load_template(session: &mut WorkoutSession, id: Uuid) -> Result<()> {
    let template = session.load_template(id).await?;
    println!("Loaded '{}': {}", template.name, template.exercises.join(", "));
    Ok(())
}

/// Delete a template
pub async fn delete_template(session: &WorkoutSession, id: Uuid) -> Result<()> {
    if !session.delete_template(id).await? {
        bail!("No template with id {id}");
    }
    println!("Template {id} deleted");
    Ok(())
}

/// Write a backup to `output`, or stdout
pub async fn export(session: &WorkoutSession, output: Option<PathBuf>) -> Result<()> {
    let bundle = backup::export(session).await?;
    let json = backup::to_json(&bundle)?;
    match output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Exported {} workouts to {}",
                bundle.workouts.len(),
                path.display()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Merge a backup file into local data
pub async fn import(session: &mut WorkoutSession, path: &Path) -> Result<()> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let report = backup::import(session, &json).await;
    if !report.success {
        bail!(report.message);
    }
    println!("{}", report.message);
    Ok(())
}
