// ABOUTME: Integration tests for daily intake summaries against resolved goals
// ABOUTME: Covers per-meal totals, day filtering, clamped progress, and percent-mode targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use macro_goals::daily_progress::DailySummary;
use macro_goals::models::{DailyGoals, FoodLogEntry, GoalAmount, MealType, Nutrient};

mod common;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap()
}

fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, day).unwrap()
}

fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn day_of_eating() -> Vec<FoodLogEntry> {
    vec![
        FoodLogEntry::from_portion(&common::oats(), 60.0, "g", MealType::Breakfast, at(10, 8)),
        FoodLogEntry::from_portion(
            &common::chicken_breast(),
            150.0,
            "g",
            MealType::Lunch,
            at(10, 13),
        ),
        // previous day, must not count
        FoodLogEntry::from_portion(&common::oats(), 40.0, "g", MealType::Snack, at(9, 21)),
    ]
}

#[test]
fn test_meals_listed_in_order_with_their_totals() {
    let summary = DailySummary::build(march(10), &day_of_eating(), &DailyGoals::default());

    let meals: Vec<MealType> = summary.meals.iter().map(|meal| meal.meal_type).collect();
    assert_eq!(meals, vec![MealType::Breakfast, MealType::Lunch]);

    let breakfast = &summary.meals[0];
    assert_eq!(breakfast.entry_count, 1);
    approx(breakfast.totals.calories, 225.0);
    approx(breakfast.totals.carbs_g, 40.5);

    let lunch = &summary.meals[1];
    approx(lunch.totals.calories, 248.0);
    approx(lunch.totals.protein_g, 46.5);
}

#[test]
fn test_day_totals_exclude_other_dates() {
    let summary = DailySummary::build(march(10), &day_of_eating(), &DailyGoals::default());

    approx(summary.totals.calories, 473.0);
    approx(summary.totals.protein_g, 54.0);
    approx(summary.totals.carbs_g, 40.5);
    approx(summary.totals.fat_g, 9.2);
    approx(summary.totals.fiber_g, 6.0);
}

#[test]
fn test_progress_against_default_goals() {
    let summary = DailySummary::build(march(10), &day_of_eating(), &DailyGoals::default());

    let protein = summary.progress_for(Nutrient::Protein).unwrap();
    approx(protein.target, 150.0);
    approx(protein.remaining, 96.0);
    approx(protein.percent, 36.0);

    let calories = summary.progress_for(Nutrient::Calories).unwrap();
    approx(calories.percent, 23.65);
    assert_eq!(summary.progress.len(), 4);
}

#[test]
fn test_exceeded_goal_clamps_to_full_with_nothing_remaining() {
    let goals = DailyGoals::absolute(2000.0, 150.0, 200.0, 5.0);
    let summary = DailySummary::build(march(10), &day_of_eating(), &goals);

    let fat = summary.progress_for(Nutrient::Fat).unwrap();
    approx(fat.consumed, 9.2);
    approx(fat.remaining, 0.0);
    approx(fat.percent, 100.0);
}

#[test]
fn test_percent_goals_are_resolved_before_measuring() {
    let goals = DailyGoals {
        calories: 2400.0,
        protein: GoalAmount::Percent(30.0),
        ..DailyGoals::default()
    };
    let summary = DailySummary::build(march(10), &day_of_eating(), &goals);

    approx(summary.goals.protein_g, 180.0);
    approx(summary.progress_for(Nutrient::Protein).unwrap().percent, 30.0);
}

#[test]
fn test_zero_target_reports_zero_percent() {
    let goals = DailyGoals::absolute(2000.0, 150.0, 0.0, 67.0);
    let summary = DailySummary::build(march(10), &day_of_eating(), &goals);

    let carbs = summary.progress_for(Nutrient::Carbs).unwrap();
    approx(carbs.percent, 0.0);
    approx(carbs.remaining, 0.0);
}

#[test]
fn test_empty_day_has_no_meals_and_zero_progress() {
    let summary = DailySummary::build(march(11), &day_of_eating(), &DailyGoals::default());

    assert!(summary.meals.is_empty());
    assert!(summary
        .progress
        .iter()
        .all(|progress| progress.percent.abs() < f64::EPSILON));
    approx(
        summary.progress_for(Nutrient::Calories).unwrap().remaining,
        2000.0,
    );
}
