// ABOUTME: Goal editing workflow toggling a macro between absolute and percent display
// ABOUTME: Validates typed amounts, previews resolved values, and commits edits with a history record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Goal Editor
//!
//! Editing one goal line moves between two viewing states, absolute and
//! percent, via [`GoalEditor::toggle_mode`]. The amount field is converted on
//! every toggle so it always holds a valid value in the active mode. Saving
//! consumes the editor, writes the new amount into the goal set and hands the
//! resulting [`GoalChange`] to the goal history.
//!
//! Toggling away and back without editing restores the exact amount that was
//! shown before the first toggle, so a no-op round trip never drifts by a
//! rounding step.

use macro_goals_core::errors::{AppError, AppResult};
use macro_goals_core::models::{ChangeSource, DailyGoals, GoalAmount, InputMode, Nutrient};
use tracing::debug;
use uuid::Uuid;

use crate::goal_history::{GoalChange, GoalHistoryRecorder, RecordOutcome};
use crate::intelligence::goal_resolution::{convert_amount, resolve_amount};

/// In-progress edit of a single goal line
#[derive(Debug, Clone, PartialEq)]
pub struct GoalEditor {
    nutrient: Nutrient,
    calorie_goal: f64,
    amount: GoalAmount,
    before_toggle: Option<GoalAmount>,
}

impl GoalEditor {
    /// Open the editor on a goal line, showing the stored value in its stored mode
    #[must_use]
    pub fn open(goals: &DailyGoals, nutrient: Nutrient) -> Self {
        Self {
            nutrient,
            calorie_goal: goals.calorie_base(),
            amount: goals.amount(nutrient),
            before_toggle: None,
        }
    }

    /// Goal line being edited
    #[must_use]
    pub const fn nutrient(&self) -> Nutrient {
        self.nutrient
    }

    /// Amount currently in the field
    #[must_use]
    pub const fn amount(&self) -> GoalAmount {
        self.amount
    }

    /// Active display mode
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.amount.input_mode()
    }

    /// Whether the mode toggle is offered; never for calories
    #[must_use]
    pub const fn can_toggle(&self) -> bool {
        self.nutrient.supports_percent()
    }

    /// Replace the field from user-entered text
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the text is not a finite, non-negative number.
    /// The editor keeps its previous amount in that case.
    pub fn set_amount_text(&mut self, text: &str) -> AppResult<()> {
        let value = text.trim().parse::<f64>().map_err(|_| {
            AppError::invalid_input(format!("'{}' is not a number", text.trim()))
                .with_resource_id(self.nutrient.label())
        })?;
        self.set_amount(value)
    }

    /// Replace the field with a numeric amount in the active mode
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the value is negative or not finite, and
    /// `ValueOutOfRange` for more than 100 percent in percent mode
    pub fn set_amount(&mut self, value: f64) -> AppResult<()> {
        let amount = GoalAmount::from_parts(value, self.amount.input_mode());
        amount
            .validate()
            .map_err(|error| error.with_resource_id(self.nutrient.label()))?;
        self.amount = amount;
        self.before_toggle = None;
        Ok(())
    }

    /// Switch between absolute and percent display, converting the field
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for the calorie goal, which has no percent form
    pub fn toggle_mode(&mut self) -> AppResult<InputMode> {
        if !self.can_toggle() {
            return Err(AppError::invalid_input(
                "The calorie goal can only be edited as an absolute amount",
            )
            .with_resource_id(self.nutrient.label()));
        }

        let target = match self.amount.input_mode() {
            InputMode::Absolute => InputMode::Percent,
            InputMode::Percent => InputMode::Absolute,
        };
        let converted = self
            .before_toggle
            .filter(|previous| previous.input_mode() == target)
            .unwrap_or_else(|| {
                convert_amount(self.amount, target, self.calorie_goal, self.nutrient)
            });

        debug!(
            goal.nutrient = self.nutrient.label(),
            from = self.amount.value(),
            to = converted.value(),
            mode = ?target,
            "Toggled goal input mode"
        );
        self.before_toggle = Some(self.amount);
        self.amount = converted;
        Ok(target)
    }

    /// Absolute value the field would resolve to if saved now
    #[must_use]
    pub fn preview_resolved(&self) -> f64 {
        resolve_amount(self.amount, self.calorie_goal, self.nutrient)
    }

    /// Save the field into the goal set and return the change it made
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when a toggle left more than 100 percent in
    /// the field, or `InvalidInput` if the goal set otherwise refuses the amount
    pub fn commit(self, goals: &mut DailyGoals) -> AppResult<GoalChange> {
        let old = goals.amount(self.nutrient);
        let old_calorie_goal = goals.calorie_base();
        goals.set_amount(self.nutrient, self.amount)?;

        Ok(GoalChange::with_calorie_snapshot(
            self.nutrient,
            old,
            self.amount,
            old_calorie_goal,
            goals.calorie_base(),
        ))
    }

    /// Save the field and record the change in the goal history.
    ///
    /// The goal set is updated even when the history write fails; the returned
    /// outcome reports what happened to the record.
    ///
    /// # Errors
    ///
    /// Returns the error from [`GoalEditor::commit`] without recording anything
    pub async fn commit_and_record(
        self,
        goals: &mut DailyGoals,
        user_id: Uuid,
        onboarding_complete: bool,
        recorder: &GoalHistoryRecorder,
    ) -> AppResult<(GoalChange, RecordOutcome)> {
        let change = self.commit(goals)?;
        let outcome = recorder
            .record_goal_change(user_id, onboarding_complete, &change, ChangeSource::Manual)
            .await;
        Ok((change, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_shows_stored_value_and_mode() {
        let goals = DailyGoals {
            fat: GoalAmount::Percent(30.0),
            ..DailyGoals::default()
        };
        let editor = GoalEditor::open(&goals, Nutrient::Fat);
        assert_eq!(editor.amount(), GoalAmount::Percent(30.0));
        assert!((editor.preview_resolved() - 67.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_non_numeric_text() {
        let mut editor = GoalEditor::open(&DailyGoals::default(), Nutrient::Protein);
        assert!(editor.set_amount_text("lots").is_err());
        assert!(editor.set_amount_text("-5").is_err());
        assert_eq!(editor.amount(), GoalAmount::Absolute(150.0));
    }

    #[test]
    fn test_calories_cannot_toggle() {
        let mut editor = GoalEditor::open(&DailyGoals::default(), Nutrient::Calories);
        assert!(!editor.can_toggle());
        assert!(editor.toggle_mode().is_err());
        assert_eq!(editor.input_mode(), InputMode::Absolute);
    }

    #[test]
    fn test_toggle_converts_field() {
        let mut editor = GoalEditor::open(&DailyGoals::default(), Nutrient::Protein);
        assert_eq!(editor.toggle_mode().unwrap(), InputMode::Percent);
        assert_eq!(editor.amount(), GoalAmount::Percent(30.0));
    }

    #[test]
    fn test_percent_field_capped_at_hundred() {
        let mut editor = GoalEditor::open(&DailyGoals::default(), Nutrient::Carbs);
        editor.toggle_mode().unwrap();
        assert!(editor.set_amount(100.0).is_ok());
        assert!(editor.set_amount(100.5).is_err());
        assert_eq!(editor.amount(), GoalAmount::Percent(100.0));
    }
}
