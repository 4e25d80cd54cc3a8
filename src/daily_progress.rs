// ABOUTME: Daily food log totals measured against resolved calorie and macro goals
// ABOUTME: Per-meal and overall intake with consumed, target, remaining, and clamped progress percent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use macro_goals_core::models::{DailyGoals, FoodLogEntry, MealType, Nutrient, ResolvedGoals};
use serde::{Deserialize, Serialize};

use crate::intelligence::goal_resolution::resolve_goals;

/// Summed nutrients for a set of food log entries
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutrientTotals {
    /// Calories (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein_g: f64,
    /// Carbohydrates (g)
    pub carbs_g: f64,
    /// Fat (g)
    pub fat_g: f64,
    /// Fiber (g)
    pub fiber_g: f64,
}

impl NutrientTotals {
    /// Sum a set of entries
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FoodLogEntry>) -> Self {
        let sum = entries
            .into_iter()
            .fold(Self::default(), |acc, entry| Self {
                calories: acc.calories + entry.calories,
                protein_g: acc.protein_g + entry.protein_g,
                carbs_g: acc.carbs_g + entry.carbs_g,
                fat_g: acc.fat_g + entry.fat_g,
                fiber_g: acc.fiber_g + entry.fiber_g,
            });
        // summing tenths accumulates float noise
        Self {
            calories: sum.calories.round(),
            protein_g: round_tenth(sum.protein_g),
            carbs_g: round_tenth(sum.carbs_g),
            fat_g: round_tenth(sum.fat_g),
            fiber_g: round_tenth(sum.fiber_g),
        }
    }

    /// Amount consumed for a goal line
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

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Intake for one meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealSummary {
    /// Meal
    pub meal_type: MealType,
    /// Number of entries logged
    pub entry_count: usize,
    /// Summed nutrients
    pub totals: NutrientTotals,
}

/// Progress of one goal line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NutrientProgress {
    /// Goal line
    pub nutrient: Nutrient,
    /// Amount eaten
    pub consumed: f64,
    /// Resolved goal
    pub target: f64,
    /// Amount left before the goal is reached; zero once it is met
    pub remaining: f64,
    /// Share of the goal eaten, clamped to 0-100
    pub percent: f64,
}

impl NutrientProgress {
    /// Measure consumption against a resolved target
    #[must_use]
    pub fn new(nutrient: Nutrient, consumed: f64, target: f64) -> Self {
        Self {
            nutrient,
            consumed,
            target,
            remaining: (target - consumed).max(0.0),
            percent: progress_percent(consumed, target),
        }
    }
}

/// Share of a target consumed, clamped to 0-100; zero when the target is not positive
#[must_use]
pub fn progress_percent(consumed: f64, target: f64) -> f64 {
    if !(target.is_finite() && target > 0.0) || !consumed.is_finite() {
        return 0.0;
    }
    (consumed / target * 100.0).clamp(0.0, 100.0)
}

/// One day of intake against goals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    /// Day summarised (UTC)
    pub date: NaiveDate,
    /// Meals with at least one entry, in display order
    pub meals: Vec<MealSummary>,
    /// Whole-day totals
    pub totals: NutrientTotals,
    /// Goal set resolved against the day's calorie goal
    pub goals: ResolvedGoals,
    /// Per-line progress in display order
    pub progress: Vec<NutrientProgress>,
}

impl DailySummary {
    /// Summarise the entries logged on `date` against a goal set
    #[must_use]
    pub fn build(date: NaiveDate, entries: &[FoodLogEntry], goals: &DailyGoals) -> Self {
        let day: Vec<&FoodLogEntry> = entries
            .iter()
            .filter(|entry| entry.logged_at.date_naive() == date)
            .collect();

        let meals = MealType::ORDER
            .into_iter()
            .filter_map(|meal_type| {
                let meal_entries: Vec<&FoodLogEntry> = day
                    .iter()
                    .copied()
                    .filter(|entry| entry.meal_type == meal_type)
                    .collect();
                (!meal_entries.is_empty()).then(|| MealSummary {
                    meal_type,
                    entry_count: meal_entries.len(),
                    totals: NutrientTotals::from_entries(meal_entries),
                })
            })
            .collect();

        let totals = NutrientTotals::from_entries(day);
        let resolved = resolve_goals(goals);
        let progress = Nutrient::ALL
            .into_iter()
            .map(|nutrient| {
                NutrientProgress::new(nutrient, totals.get(nutrient), resolved.get(nutrient))
            })
            .collect();

        Self {
            date,
            meals,
            totals,
            goals: resolved,
            progress,
        }
    }

    /// Progress for a goal line
    #[must_use]
    pub fn progress_for(&self, nutrient: Nutrient) -> Option<&NutrientProgress> {
        self.progress.iter().find(|progress| progress.nutrient == nutrient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_percent_is_clamped() {
        assert!((progress_percent(50.0, 100.0) - 50.0).abs() < f64::EPSILON);
        assert!((progress_percent(250.0, 100.0) - 100.0).abs() < f64::EPSILON);
        assert!(progress_percent(-5.0, 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_percent_zero_target() {
        assert!(progress_percent(50.0, 0.0).abs() < f64::EPSILON);
        assert!(progress_percent(50.0, -10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remaining_is_zero_once_met() {
        let progress = NutrientProgress::new(Nutrient::Protein, 180.0, 150.0);
        assert!(progress.remaining.abs() < f64::EPSILON);
        assert!((progress.percent - 100.0).abs() < f64::EPSILON);
    }
}
