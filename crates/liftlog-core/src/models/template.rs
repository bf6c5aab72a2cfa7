// ABOUTME: Saved workout template capturing a reusable muscle and exercise selection
// ABOUTME: Stored in the templates partition of the record store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::MuscleGroup;

/// Reusable selection of muscle groups and exercises
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    /// Record identifier
    pub id: Uuid,
    /// User-chosen name
    pub name: String,
    /// Target muscle groups
    pub muscles: Vec<MuscleGroup>,
    /// Exercise names in order
    pub exercises: Vec<String>,
    /// Creation instant
    pub created_at: DateTime<Utc>,
}
