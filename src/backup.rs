// ABOUTME: Backup export and validated import of workouts, exercise history and templates
// ABOUTME: Imports are checked in full before anything is written; corrupt documents change nothing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Utc};
use liftlog_core::constants::backup::{FORMAT_VERSION, MAX_WORKOUT_DURATION_SECONDS};
use liftlog_core::models::{CompletedWorkout, ExerciseHistory, WorkoutSet, WorkoutTemplate};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::{AppError, AppResult};
use crate::session::WorkoutSession;
use crate::store::{Partition, RecordStoreExt};

/// Portable snapshot of everything worth keeping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupBundle {
    /// Format version
    pub version: u32,
    /// Export instant
    pub exported_at: DateTime<Utc>,
    /// Completed workouts, newest first
    pub workouts: Vec<CompletedWorkout>,
    /// Per-exercise history
    pub exercise_history: Vec<ExerciseHistory>,
    /// Saved templates
    #[serde(default)]
    pub templates: Vec<WorkoutTemplate>,
}

/// Outcome of an import, suitable for showing to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Whether the backup was applied
    pub success: bool,
    /// Human-readable summary or failure reason
    pub message: String,
}

impl ImportReport {
    fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Snapshot the session's history, records and templates
///
/// # Errors
///
/// Returns a storage error if templates cannot be read
pub async fn export(session: &WorkoutSession) -> AppResult<BackupBundle> {
    let bundle = BackupBundle {
        version: FORMAT_VERSION,
        exported_at: Utc::now(),
        workouts: session.workout_history().to_vec(),
        exercise_history: session.history().all().cloned().collect(),
        templates: session.templates().await?,
    };
    info!(
        backup.workouts = bundle.workouts.len(),
        backup.exercises = bundle.exercise_history.len(),
        backup.templates = bundle.templates.len(),
        "Backup exported"
    );
    Ok(bundle)
}

/// Serialize a bundle as pretty JSON
///
/// # Errors
///
/// Returns a serialization error if encoding fails
pub fn to_json(bundle: &BackupBundle) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(bundle)?)
}

/// Parse and check a backup document without applying it
///
/// # Errors
///
/// Returns `InvalidFormat` for malformed JSON and `InvalidInput` for an
/// unsupported version or out-of-range values
pub fn validate(json: &str) -> AppResult<BackupBundle> {
    let bundle: BackupBundle = serde_json::from_str(json)
        .map_err(|e| AppError::invalid_format(format!("Backup is not a valid document: {e}")))?;

    if bundle.version != FORMAT_VERSION {
        return Err(AppError::invalid_input(format!(
            "Unsupported backup version {} (expected {FORMAT_VERSION})",
            bundle.version
        )));
    }

    for workout in &bundle.workouts {
        if !non_negative(workout.total_volume) {
            return Err(AppError::invalid_input(format!(
                "Workout {} has an invalid total volume",
                workout.id
            )));
        }
        if workout.duration_seconds > MAX_WORKOUT_DURATION_SECONDS {
            return Err(AppError::invalid_input(format!(
                "Workout {} lasts {} seconds, more than the {MAX_WORKOUT_DURATION_SECONDS} allowed",
                workout.id, workout.duration_seconds
            )));
        }
        for exercise in &workout.exercises {
            check_sets(&exercise.name, &exercise.sets)?;
        }
    }

    for history in &bundle.exercise_history {
        if history.exercise_name.trim().is_empty() {
            return Err(AppError::invalid_input("Exercise history entry without a name"));
        }
        let record = history.personal_record;
        if !non_negative(record.max_weight) || !non_negative(record.max_volume) {
            return Err(AppError::invalid_input(format!(
                "Exercise {} has an invalid personal record",
                history.exercise_name
            )));
        }
        check_sets(&history.exercise_name, &history.last_sets)?;
    }

    if let Some(template) = bundle.templates.iter().find(|t| t.name.trim().is_empty()) {
        return Err(AppError::invalid_input(format!(
            "Template {} has no name",
            template.id
        )));
    }

    Ok(bundle)
}

/// Validate and merge a backup into the session
///
/// Workouts merge by id, exercise history merges per exercise, templates are
/// upserted. A document that fails validation is reported and nothing is written.
pub async fn import(session: &mut WorkoutSession, json: &str) -> ImportReport {
    let bundle = match validate(json) {
        Ok(bundle) => bundle,
        Err(e) => {
            warn!(error = %e, "Rejected backup import");
            return ImportReport::failed(e.message);
        }
    };

    let workout_count = bundle.workouts.len();
    let exercise_count = bundle.exercise_history.len();
    let template_count = bundle.templates.len();

    match apply(session, bundle).await {
        Ok(added) => {
            let message = format!(
                "Imported {workout_count} workouts ({added} new), {exercise_count} exercise records and {template_count} templates"
            );
            info!(%message, "Backup imported");
            ImportReport {
                success: true,
                message,
            }
        }
        Err(e) => {
            warn!(error = %e, "Backup import failed while writing");
            ImportReport::failed(format!("Import failed while saving: {}", e.message))
        }
    }
}

async fn apply(session: &mut WorkoutSession, bundle: BackupBundle) -> AppResult<usize> {
    let added = session.import_workouts(bundle.workouts).await?;
    session.history_mut().merge(bundle.exercise_history);
    for template in &bundle.templates {
        session
            .records()
            .put_json(Partition::Templates, &template.id.to_string(), template)
            .await?;
    }
    Ok(added)
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn check_sets(exercise: &str, sets: &[WorkoutSet]) -> AppResult<()> {
    let invalid = sets.iter().any(|set| {
        !non_negative(set.weight) || set.distance_km.is_some_and(|d| !non_negative(d))
    });
    if invalid {
        return Err(AppError::invalid_input(format!(
            "Exercise {exercise} contains a set with a negative or invalid value"
        )));
    }
    Ok(())
}
