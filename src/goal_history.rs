// ABOUTME: Goal change audit contract with best-effort appends to a goal history store
// ABOUTME: Detects stored value or mode changes, resolves both sides, and records them after onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal History
//!
//! A [`GoalChangeRecord`] is appended only when a goal's stored value or input
//! mode actually changes and the caller reports onboarding as complete. Appends
//! are best-effort: a store failure is logged and returned as
//! [`RecordOutcome::PersistFailed`], never as an error of the goal update.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use macro_goals_core::errors::history::HistoryError;
use macro_goals_core::errors::AppResult;
use macro_goals_core::models::{
    ChangeSource, DailyGoals, GoalAmount, GoalChangeRecord, InputMode, Nutrient,
};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::intelligence::goal_resolution::resolve_amount;
use crate::logging::AppLogger;

/// Tolerance under which two stored values are considered equal
const VALUE_TOLERANCE: f64 = 1e-9;

/// One goal line before and after an edit, with the calorie goals used to resolve each side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalChange {
    /// Goal line
    pub nutrient: Nutrient,
    /// Stored amount before the edit
    pub old: GoalAmount,
    /// Stored amount after the edit
    pub new: GoalAmount,
    /// Calorie goal used to resolve `old`
    pub old_calorie_goal: f64,
    /// Calorie goal used to resolve `new`
    pub new_calorie_goal: f64,
}

impl GoalChange {
    /// Change resolved against a single calorie goal snapshot
    #[must_use]
    pub const fn new(
        nutrient: Nutrient,
        old: GoalAmount,
        new: GoalAmount,
        calorie_goal: f64,
    ) -> Self {
        Self::with_calorie_snapshot(nutrient, old, new, calorie_goal, calorie_goal)
    }

    /// Change whose two sides resolve against different calorie goals
    #[must_use]
    pub const fn with_calorie_snapshot(
        nutrient: Nutrient,
        old: GoalAmount,
        new: GoalAmount,
        old_calorie_goal: f64,
        new_calorie_goal: f64,
    ) -> Self {
        Self {
            nutrient,
            old,
            new,
            old_calorie_goal,
            new_calorie_goal,
        }
    }

    /// Whether the stored value or the input mode differs
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.old.input_mode() != self.new.input_mode()
            || (self.old.value() - self.new.value()).abs() > VALUE_TOLERANCE
    }

    /// Old stored amount as an absolute value
    #[must_use]
    pub fn resolved_old(&self) -> f64 {
        resolve_amount(self.old, self.old_calorie_goal, self.nutrient)
    }

    /// New stored amount as an absolute value
    #[must_use]
    pub fn resolved_new(&self) -> f64 {
        resolve_amount(self.new, self.new_calorie_goal, self.nutrient)
    }

    /// Mode of the new stored amount
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.new.input_mode()
    }
}

/// Per-line changes between two goal sets, each side resolved against its own calorie goal
#[must_use]
pub fn diff_goal_sets(old: &DailyGoals, new: &DailyGoals) -> Vec<GoalChange> {
    Nutrient::ALL
        .into_iter()
        .map(|nutrient| {
            GoalChange::with_calorie_snapshot(
                nutrient,
                old.amount(nutrient),
                new.amount(nutrient),
                old.calorie_base(),
                new.calorie_base(),
            )
        })
        .filter(GoalChange::is_change)
        .collect()
}

/// Build the audit record for a change
#[must_use]
pub fn build_goal_change_record(
    user_id: Uuid,
    change: &GoalChange,
    change_source: ChangeSource,
    changed_at: DateTime<Utc>,
) -> GoalChangeRecord {
    GoalChangeRecord {
        id: Uuid::new_v4(),
        user_id,
        nutrient: change.nutrient,
        input_mode: change.input_mode(),
        old_value: Some(change.old.value()),
        new_value: change.new.value(),
        resolved_old_value: Some(change.resolved_old()),
        resolved_new_value: change.resolved_new(),
        change_source,
        changed_at,
    }
}

/// Append-only goal history storage
#[async_trait]
pub trait GoalHistoryStore: Send + Sync {
    /// Append a record
    async fn append(&self, record: GoalChangeRecord) -> Result<(), HistoryError>;

    /// Records for a user, oldest first
    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<GoalChangeRecord>, HistoryError>;
}

/// Process-local goal history store
#[derive(Debug, Default)]
pub struct InMemoryGoalHistoryStore {
    records: RwLock<Vec<GoalChangeRecord>>,
}

impl InMemoryGoalHistoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records across all users
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl GoalHistoryStore for InMemoryGoalHistoryStore {
    async fn append(&self, record: GoalChangeRecord) -> Result<(), HistoryError> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<GoalChangeRecord>, HistoryError> {
        Ok(self
            .records
            .read()
            .await
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}

/// What happened to a requested goal change record
#[derive(Debug, Clone)]
pub enum RecordOutcome {
    /// Neither value nor mode changed; nothing written
    Unchanged,
    /// Onboarding still in progress; nothing written
    OnboardingIncomplete,
    /// Record appended
    Recorded(GoalChangeRecord),
    /// Append failed; the goal update stands
    PersistFailed {
        /// Record that could not be written
        record: GoalChangeRecord,
        /// Store failure
        error: HistoryError,
    },
}

impl RecordOutcome {
    /// Whether a record reached the store
    #[must_use]
    pub const fn is_recorded(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }
}

/// Writes goal change records through a [`GoalHistoryStore`]
#[derive(Clone)]
pub struct GoalHistoryRecorder {
    store: Arc<dyn GoalHistoryStore>,
}

impl GoalHistoryRecorder {
    /// Create a recorder over a store
    #[must_use]
    pub fn new(store: Arc<dyn GoalHistoryStore>) -> Self {
        Self { store }
    }

    /// Record a single goal change if it is a real change and onboarding is complete
    pub async fn record_goal_change(
        &self,
        user_id: Uuid,
        onboarding_complete: bool,
        change: &GoalChange,
        change_source: ChangeSource,
    ) -> RecordOutcome {
        if !change.is_change() {
            return RecordOutcome::Unchanged;
        }
        if !onboarding_complete {
            debug!(
                user.id = %user_id,
                goal.nutrient = change.nutrient.label(),
                "Onboarding incomplete, goal change not recorded"
            );
            return RecordOutcome::OnboardingIncomplete;
        }

        let record = build_goal_change_record(user_id, change, change_source, Utc::now());
        self.append(record).await
    }

    /// Record the settled goal set when onboarding completes; one baseline per line
    pub async fn record_onboarding_baseline(
        &self,
        user_id: Uuid,
        goals: &DailyGoals,
    ) -> Vec<RecordOutcome> {
        let calorie_goal = goals.calorie_base();
        let changed_at = Utc::now();
        let mut outcomes = Vec::with_capacity(Nutrient::ALL.len());

        for nutrient in Nutrient::ALL {
            let amount = goals.amount(nutrient);
            let record = GoalChangeRecord {
                id: Uuid::new_v4(),
                user_id,
                nutrient,
                input_mode: amount.input_mode(),
                old_value: None,
                new_value: amount.value(),
                resolved_old_value: None,
                resolved_new_value: resolve_amount(amount, calorie_goal, nutrient),
                change_source: ChangeSource::Onboarding,
                changed_at,
            };
            outcomes.push(self.append(record).await);
        }
        outcomes
    }

    /// Record every line that changed between two goal sets after a recalculation
    pub async fn record_recalculation(
        &self,
        user_id: Uuid,
        onboarding_complete: bool,
        old: &DailyGoals,
        new: &DailyGoals,
    ) -> Vec<RecordOutcome> {
        let mut outcomes = Vec::new();
        for change in diff_goal_sets(old, new) {
            outcomes.push(
                self.record_goal_change(
                    user_id,
                    onboarding_complete,
                    &change,
                    ChangeSource::AutoRecalculation,
                )
                .await,
            );
        }
        outcomes
    }

    /// Goal history for a user
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read
    pub async fn history(&self, user_id: Uuid) -> AppResult<Vec<GoalChangeRecord>> {
        Ok(self.store.list_for_user(user_id).await?)
    }

    async fn append(&self, record: GoalChangeRecord) -> RecordOutcome {
        match self.store.append(record.clone()).await {
            Ok(()) => {
                AppLogger::log_goal_change(
                    record.user_id,
                    record.nutrient,
                    record.old_value,
                    record.new_value,
                    record.change_source,
                );
                RecordOutcome::Recorded(record)
            }
            Err(error) => {
                AppLogger::log_audit_failure(record.user_id, record.nutrient, &error);
                RecordOutcome::PersistFailed { record, error }
            }
        }
    }
}
