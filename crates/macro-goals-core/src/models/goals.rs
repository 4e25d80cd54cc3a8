// ABOUTME: Daily goal models with absolute and percent-of-calories representations
// ABOUTME: Nutrient, InputMode, GoalAmount tagged union, Goal display record, DailyGoals set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::constants::nutrition::{
    CARBS_KCAL_PER_G, DEFAULT_CALORIES, DEFAULT_CARBS_G, DEFAULT_FAT_G, DEFAULT_PROTEIN_G,
    FAT_KCAL_PER_G, MAX_GOAL_PERCENT, PROTEIN_KCAL_PER_G,
};
use crate::errors::{AppError, AppResult};

/// A goal line: the calorie goal or one of the three macros
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Daily energy (kcal)
    Calories,
    /// Protein (g)
    Protein,
    /// Carbohydrates (g)
    Carbs,
    /// Fat (g)
    Fat,
}

impl Nutrient {
    /// All goal lines in display order
    pub const ALL: [Self; 4] = [Self::Calories, Self::Protein, Self::Carbs, Self::Fat];

    /// The macros, which may be expressed as a percentage of calories
    pub const MACROS: [Self; 3] = [Self::Protein, Self::Carbs, Self::Fat];

    /// Display label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::Protein => "Protein",
            Self::Carbs => "Carbs",
            Self::Fat => "Fat",
        }
    }

    /// Display unit; calories carry none
    #[must_use]
    pub const fn unit(&self) -> Option<&'static str> {
        match self {
            Self::Calories => None,
            Self::Protein | Self::Carbs | Self::Fat => Some("g"),
        }
    }

    /// Energy density in kcal per gram; `None` for the calorie line itself
    #[must_use]
    pub const fn kcal_per_gram(&self) -> Option<f64> {
        match self {
            Self::Calories => None,
            Self::Protein => Some(PROTEIN_KCAL_PER_G),
            Self::Carbs => Some(CARBS_KCAL_PER_G),
            Self::Fat => Some(FAT_KCAL_PER_G),
        }
    }

    /// Whether the goal can be stored as a percentage of calories
    #[must_use]
    pub const fn supports_percent(&self) -> bool {
        !matches!(self, Self::Calories)
    }
}

/// How a goal value is stored
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// Direct unit amount (g or kcal)
    #[default]
    Absolute,
    /// Percentage points (0-100) of the calorie goal
    Percent,
}

/// Stored representation of a macro goal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "input_mode", content = "value", rename_all = "snake_case")]
pub enum GoalAmount {
    /// Grams
    Absolute(f64),
    /// Percentage points of the calorie goal
    Percent(f64),
}

impl GoalAmount {
    /// Rebuild an amount from its stored parts
    #[must_use]
    pub const fn from_parts(value: f64, input_mode: InputMode) -> Self {
        match input_mode {
            InputMode::Absolute => Self::Absolute(value),
            InputMode::Percent => Self::Percent(value),
        }
    }

    /// Stored value (grams or percentage points)
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Absolute(value) | Self::Percent(value) => *value,
        }
    }

    /// Stored mode
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        match self {
            Self::Absolute(_) => InputMode::Absolute,
            Self::Percent(_) => InputMode::Percent,
        }
    }

    /// Check the stored value: finite, not negative, and at most 100 percentage points
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a negative or non-finite value and
    /// `ValueOutOfRange` for a percentage above 100
    pub fn validate(&self) -> AppResult<()> {
        let value = self.value();
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "Goal amount must be a non-negative number, got {value}"
            )));
        }
        if matches!(self, Self::Percent(_)) && value > MAX_GOAL_PERCENT {
            return Err(AppError::out_of_range(format!(
                "A percentage goal cannot exceed {MAX_GOAL_PERCENT}%, got {value}%"
            ))
            .with_details(json!({ "value": value, "max": MAX_GOAL_PERCENT })));
        }
        Ok(())
    }
}

/// Flat goal record as shown by goal lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    /// Goal line
    pub label: Nutrient,
    /// Stored value
    pub value: f64,
    /// Display unit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Stored mode
    pub input_mode: InputMode,
}

/// A user's goal set.
///
/// The calorie goal is a bare kcal amount, so it can never be in percent mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyGoals {
    /// Calorie goal (kcal)
    pub calories: f64,
    /// Protein goal
    pub protein: GoalAmount,
    /// Carbohydrate goal
    pub carbs: GoalAmount,
    /// Fat goal
    pub fat: GoalAmount,
}

impl Default for DailyGoals {
    fn default() -> Self {
        Self::absolute(
            f64::from(DEFAULT_CALORIES),
            f64::from(DEFAULT_PROTEIN_G),
            f64::from(DEFAULT_CARBS_G),
            f64::from(DEFAULT_FAT_G),
        )
    }
}

impl DailyGoals {
    /// Goal set with every macro in absolute mode
    #[must_use]
    pub const fn absolute(calories: f64, protein_g: f64, carbs_g: f64, fat_g: f64) -> Self {
        Self {
            calories,
            protein: GoalAmount::Absolute(protein_g),
            carbs: GoalAmount::Absolute(carbs_g),
            fat: GoalAmount::Absolute(fat_g),
        }
    }

    /// Stored amount for a goal line; calories are always absolute
    #[must_use]
    pub const fn amount(&self, nutrient: Nutrient) -> GoalAmount {
        match nutrient {
            Nutrient::Calories => GoalAmount::Absolute(self.calories),
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
        }
    }

    /// Replace the stored amount for a goal line
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when asked to store the calorie goal as a percentage
    /// or a negative amount, and `ValueOutOfRange` for a percentage above 100
    pub fn set_amount(&mut self, nutrient: Nutrient, amount: GoalAmount) -> AppResult<()> {
        amount
            .validate()
            .map_err(|error| error.with_resource_id(nutrient.label()))?;
        match (nutrient, amount) {
            (Nutrient::Calories, GoalAmount::Absolute(kcal)) => self.calories = kcal,
            (Nutrient::Calories, GoalAmount::Percent(_)) => {
                return Err(AppError::invalid_input(
                    "The calorie goal cannot be expressed as a percentage of itself",
                )
                .with_resource_id(nutrient.label()));
            }
            (Nutrient::Protein, amount) => self.protein = amount,
            (Nutrient::Carbs, amount) => self.carbs = amount,
            (Nutrient::Fat, amount) => self.fat = amount,
        }
        Ok(())
    }

    /// Calorie goal used as the percentage base, falling back to the default
    /// when the stored goal is zero, negative or not a number
    #[must_use]
    pub fn calorie_base(&self) -> f64 {
        if self.calories.is_finite() && self.calories > 0.0 {
            self.calories
        } else {
            f64::from(DEFAULT_CALORIES)
        }
    }

    /// Flat goal records in display order
    #[must_use]
    pub fn goals(&self) -> Vec<Goal> {
        Nutrient::ALL
            .into_iter()
            .map(|nutrient| {
                let amount = self.amount(nutrient);
                Goal {
                    label: nutrient,
                    value: amount.value(),
                    unit: nutrient.unit().map(str::to_owned),
                    input_mode: amount.input_mode(),
                }
            })
            .collect()
    }
}

/// Absolute goal values (kcal and grams) ready for display and totals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct ResolvedGoals {
    /// Calorie goal (kcal)
    pub calories: f64,
    /// Protein goal (g)
    pub protein_g: f64,
    /// Carbohydrate goal (g)
    pub carbs_g: f64,
    /// Fat goal (g)
    pub fat_g: f64,
}

impl ResolvedGoals {
    /// Absolute value for a goal line
    #[must_use]
    pub const fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein_g,
            Nutrient::Carbs => self.carbs_g,
            Nutrient::Fat => self.fat_g,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    #[test]
    fn test_default_goal_set() {
        let goals = DailyGoals::default();
        assert!((goals.calories - 2000.0).abs() < f64::EPSILON);
        assert_eq!(goals.protein, GoalAmount::Absolute(150.0));
        assert_eq!(goals.carbs, GoalAmount::Absolute(200.0));
        assert_eq!(goals.fat, GoalAmount::Absolute(67.0));
    }

    #[test]
    fn test_calories_reject_percent_mode() {
        let mut goals = DailyGoals::default();
        let result = goals.set_amount(Nutrient::Calories, GoalAmount::Percent(50.0));
        assert!(result.is_err());
        assert!((goals.calories - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_macro_accepts_percent_mode() {
        let mut goals = DailyGoals::default();
        goals
            .set_amount(Nutrient::Fat, GoalAmount::Percent(30.0))
            .unwrap();
        assert_eq!(goals.amount(Nutrient::Fat).input_mode(), InputMode::Percent);
    }

    #[test]
    fn test_calorie_base_falls_back_when_not_positive() {
        let mut goals = DailyGoals::default();
        goals.calories = 0.0;
        assert!((goals.calorie_base() - 2000.0).abs() < f64::EPSILON);
        goals.calories = f64::NAN;
        assert!((goals.calorie_base() - 2000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_amount_serializes_as_tagged_value() {
        let json = serde_json::to_value(GoalAmount::Percent(30.0)).unwrap();
        assert_eq!(json["input_mode"], "percent");
        assert_eq!(json["value"], 30.0);
    }

    #[test]
    fn test_goal_records_follow_display_order() {
        let goals = DailyGoals::default().goals();
        let labels: Vec<_> = goals.iter().map(|goal| goal.label.label()).collect();
        assert_eq!(labels, ["Calories", "Protein", "Carbs", "Fat"]);
        assert!(goals[0].unit.is_none());
        assert_eq!(goals[1].unit.as_deref(), Some("g"));
    }

    #[test]
    fn test_percent_above_hundred_is_out_of_range() {
        let mut goals = DailyGoals::default();
        let error = goals
            .set_amount(Nutrient::Protein, GoalAmount::Percent(120.0))
            .unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert_eq!(error.context.details["max"], 100.0);
        assert_eq!(goals.protein, GoalAmount::Absolute(150.0));

        goals
            .set_amount(Nutrient::Protein, GoalAmount::Percent(100.0))
            .unwrap();
        assert!(goals
            .set_amount(Nutrient::Carbs, GoalAmount::Absolute(-1.0))
            .is_err());
    }
}
