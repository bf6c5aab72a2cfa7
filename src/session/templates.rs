// ABOUTME: Saving and loading workout templates from the record store
// ABOUTME: A template captures the selected muscles and exercise names, never set data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::Utc;
use liftlog_core::models::{SessionPhase, WorkoutTemplate};
use tracing::info;
use uuid::Uuid;

use super::WorkoutSession;
use crate::errors::{AppError, AppResult};
use crate::store::{Partition, RecordStoreExt};

impl WorkoutSession {
    /// Store the current selection as a named template
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank name or an empty selection, or a storage
    /// error if the template cannot be written
    pub async fn save_template(&self, name: &str) -> AppResult<WorkoutTemplate> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Template name cannot be empty"));
        }
        if self.selected_exercises.is_empty() {
            return Err(AppError::invalid_input(
                "Select at least one exercise before saving a template",
            ));
        }

        let template = WorkoutTemplate {
            id: Uuid::new_v4(),
            name: name.to_owned(),
            muscles: self.muscles.clone(),
            exercises: self.selected_exercises.clone(),
            created_at: Utc::now(),
        };
        self.records
            .put_json(Partition::Templates, &template.id.to_string(), &template)
            .await?;
        info!(template.id = %template.id, template.name = %template.name, "Template saved");
        Ok(template)
    }

    /// Saved templates, newest first
    ///
    /// # Errors
    ///
    /// Returns a storage error if the partition cannot be read
    pub async fn templates(&self) -> AppResult<Vec<WorkoutTemplate>> {
        let mut templates: Vec<WorkoutTemplate> =
            self.records.list_json(Partition::Templates).await?;
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(templates)
    }

    /// Restore a template's muscles and exercises and move to `selection`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if no template has this id
    pub async fn load_template(&mut self, id: Uuid) -> AppResult<WorkoutTemplate> {
        let template: WorkoutTemplate = self
            .records
            .get_json(Partition::Templates, &id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Template {id}")))?;

        self.set_muscles(template.muscles.iter().copied());
        self.set_selected_exercises(template.exercises.iter().cloned());
        if matches!(self.phase, SessionPhase::Setup | SessionPhase::Summary) {
            self.completed_workout = None;
            self.transition(SessionPhase::Selection, "template loaded", true);
        }
        Ok(template)
    }

    /// Delete a template, returning whether it existed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the record cannot be removed
    pub async fn delete_template(&self, id: Uuid) -> AppResult<bool> {
        self.records
            .delete_record(Partition::Templates, &id.to_string())
            .await
    }
}
