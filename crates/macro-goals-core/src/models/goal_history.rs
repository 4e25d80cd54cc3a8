// ABOUTME: Append-only goal change audit record model
// ABOUTME: GoalChangeRecord with stored and resolved values plus the ChangeSource of the edit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::goals::{InputMode, Nutrient};

/// Workflow that produced a goal change
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChangeSource {
    /// Settled values written when onboarding completes
    Onboarding,
    /// User edited a goal by hand
    Manual,
    /// Goals re-derived from changed biometrics
    AutoRecalculation,
}

/// Audit entry for one goal line change
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalChangeRecord {
    /// Record identifier
    pub id: Uuid,
    /// Owner of the goal set
    pub user_id: Uuid,
    /// Goal line that changed
    #[serde(rename = "macro")]
    pub nutrient: Nutrient,
    /// Mode of the new stored value
    pub input_mode: InputMode,
    /// Previous stored value; absent for the onboarding baseline
    pub old_value: Option<f64>,
    /// New stored value
    pub new_value: f64,
    /// Previous value as an absolute amount
    pub resolved_old_value: Option<f64>,
    /// New value as an absolute amount
    pub resolved_new_value: f64,
    /// Workflow that made the change
    pub change_source: ChangeSource,
    /// When the record was created
    pub changed_at: DateTime<Utc>,
}
