// ABOUTME: Goal resolution engine converting between percent-of-calories and absolute goal values
// ABOUTME: Resolves stored goal amounts to grams using the current calorie goal as the base
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Goal Resolution Engine
//!
//! A macro goal may be stored as grams or as percentage points of the calorie
//! goal. Resolution always recomputes grams from the *current* calorie goal, so
//! a percent-mode goal follows calorie changes automatically.
//!
//! Both directions round their final result with [`round_half_up`] and guard a
//! non-positive or non-finite calorie goal by returning zero. The calorie line
//! itself has no percent form and always resolves to its stored value.
//!
//! Because both directions round, `percent -> grams -> percent` returns within
//! one point of the input for realistic calorie goals (1200 kcal and above).

use macro_goals_core::models::{DailyGoals, GoalAmount, InputMode, Nutrient, ResolvedGoals};

use super::goal_derivation::round_half_up;

fn usable_calorie_goal(calorie_goal: f64) -> Option<f64> {
    (calorie_goal.is_finite() && calorie_goal > 0.0).then_some(calorie_goal)
}

/// Resolve a stored value to an absolute amount (grams, or kcal for calories)
#[must_use]
pub fn resolve_absolute(
    value: f64,
    input_mode: InputMode,
    calorie_goal: f64,
    nutrient: Nutrient,
) -> f64 {
    let (InputMode::Percent, Some(kcal_per_gram)) = (input_mode, nutrient.kcal_per_gram()) else {
        return value;
    };
    usable_calorie_goal(calorie_goal).map_or(0.0, |calorie_goal| {
        round_half_up(calorie_goal * value / 100.0 / kcal_per_gram)
    })
}

/// Express an absolute amount as whole percentage points of the calorie goal
#[must_use]
pub fn resolve_percent(absolute_value: f64, calorie_goal: f64, nutrient: Nutrient) -> f64 {
    let Some(calorie_goal) = usable_calorie_goal(calorie_goal) else {
        return 0.0;
    };
    match nutrient.kcal_per_gram() {
        Some(kcal_per_gram) => {
            round_half_up(absolute_value * kcal_per_gram / calorie_goal * 100.0)
        }
        None => round_half_up(absolute_value / calorie_goal * 100.0),
    }
}

/// Resolve a stored amount against a calorie goal
#[must_use]
pub fn resolve_amount(amount: GoalAmount, calorie_goal: f64, nutrient: Nutrient) -> f64 {
    resolve_absolute(amount.value(), amount.input_mode(), calorie_goal, nutrient)
}

/// Convert a stored amount into the requested mode
#[must_use]
pub fn convert_amount(
    amount: GoalAmount,
    target_mode: InputMode,
    calorie_goal: f64,
    nutrient: Nutrient,
) -> GoalAmount {
    match (amount, target_mode) {
        (GoalAmount::Absolute(_), InputMode::Absolute)
        | (GoalAmount::Percent(_), InputMode::Percent) => amount,
        (GoalAmount::Percent(_), InputMode::Absolute) => {
            GoalAmount::Absolute(resolve_amount(amount, calorie_goal, nutrient))
        }
        (GoalAmount::Absolute(grams), InputMode::Percent) => {
            GoalAmount::Percent(resolve_percent(grams, calorie_goal, nutrient))
        }
    }
}

/// Resolve a whole goal set against its own calorie goal.
///
/// A missing (non-positive) calorie goal falls back to the default base for
/// percent-mode macros; the calorie line still reports the stored value.
#[must_use]
pub fn resolve_goals(goals: &DailyGoals) -> ResolvedGoals {
    let calorie_goal = goals.calorie_base();
    ResolvedGoals {
        calories: goals.calories,
        protein_g: resolve_amount(goals.protein, calorie_goal, Nutrient::Protein),
        carbs_g: resolve_amount(goals.carbs, calorie_goal, Nutrient::Carbs),
        fat_g: resolve_amount(goals.fat, calorie_goal, Nutrient::Fat),
    }
}

/// Share of the calorie goal each resolved macro accounts for, in whole percent
#[must_use]
pub fn macro_percentages(resolved: &ResolvedGoals) -> [(Nutrient, f64); 3] {
    Nutrient::MACROS.map(|nutrient| {
        (
            nutrient,
            resolve_percent(resolved.get(nutrient), resolved.calories, nutrient),
        )
    })
}
